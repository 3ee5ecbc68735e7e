//! CLI frontend for the Quillsheet character-sheet editor.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use qs_core::EditorConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "qs",
    about = "Quillsheet: a character sheet editor for academy adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Character record file
    #[arg(short, long, global = true, default_value = "character.json")]
    file: PathBuf,

    /// Log engine decisions (clamps, rejected selections) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new first-year character record
    New {
        /// Character name
        name: String,

        /// Player name
        #[arg(short, long)]
        player: Option<String>,

        /// House affiliation (e.g. "house of valor" or "valor")
        #[arg(long)]
        house: Option<String>,

        /// School year (1-7)
        #[arg(short, long, default_value = "1")]
        year: i32,

        /// Overwrite an existing record
        #[arg(long)]
        force: bool,
    },

    /// Show traits, bonuses, and effective scores
    Show,

    /// List the base scores a trait may currently select
    Options {
        /// Trait name (bravery, mischief, knowledge, loyalty, magic)
        name: String,
    },

    /// Assign a base score from the pool to a trait ("none" to clear)
    SetBase {
        /// Trait name
        name: String,

        /// Base score, or "none"
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Commit year bonus points to a trait
    Allocate {
        /// Trait name
        name: String,

        /// Total points for this trait
        #[arg(allow_negative_numbers = true)]
        points: i64,
    },

    /// Change the character's school year
    SetYear {
        /// School year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Change the character's house ("none" to clear)
    SetHouse {
        /// House name
        house: String,
    },

    /// Show abilities derived from effective trait scores
    Abilities {
        /// Show a single ability (e.g. "potions" or "sleight of hand")
        name: Option<String>,
    },

    /// Validate the record and report warnings
    Check,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = EditorConfig::default().with_path(&cli.file);

    let result = match cli.command {
        Commands::New {
            name,
            player,
            house,
            year,
            force,
        } => commands::new::run(
            &config.with_year(year),
            &name,
            player.as_deref(),
            house.as_deref(),
            force,
        ),
        Commands::Show => commands::show::run(&config),
        Commands::Options { name } => commands::options::run(&config, &name),
        Commands::SetBase { name, value } => commands::set_base::run(&config, &name, &value),
        Commands::Allocate { name, points } => commands::allocate::run(&config, &name, points),
        Commands::SetYear { year } => commands::set_year::run(&config, year),
        Commands::SetHouse { house } => commands::set_house::run(&config, &house),
        Commands::Abilities { name } => commands::abilities::run(&config, name.as_deref()),
        Commands::Check => commands::check::run(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
