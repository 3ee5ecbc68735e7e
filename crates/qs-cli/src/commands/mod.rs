pub mod abilities;
pub mod allocate;
pub mod check;
pub mod new;
pub mod options;
pub mod set_base;
pub mod set_house;
pub mod set_year;
pub mod show;

use colored::Colorize;
use qs_core::{Character, CharacterStore, EditorConfig, JsonFileStore, TraitName, load_or_else};

/// Load the record for editing. A missing file is an error here.
fn load(config: &EditorConfig) -> Result<(JsonFileStore, Character), String> {
    let store = JsonFileStore::new(&config.path);
    let character = store
        .load()
        .map_err(|e| e.to_string())?
        .ok_or_else(|| {
            format!(
                "no character at {}; create one with `qs new <name>`",
                store.path().display()
            )
        })?;
    Ok((store, character))
}

/// Load the record for display, falling back to a blank sheet.
fn load_for_display(config: &EditorConfig) -> Result<Character, String> {
    let store = JsonFileStore::new(&config.path);
    load_or_else(&store, || {
        Character::new("New Character").with_year(config.new_character_year)
    })
    .map_err(|e| e.to_string())
}

fn save(store: &JsonFileStore, character: &Character) -> Result<(), String> {
    store.save(character).map_err(|e| e.to_string())
}

fn parse_trait(name: &str) -> Result<TraitName, String> {
    TraitName::parse(name).map_err(|e| e.to_string())
}

/// Render a selector option: a score, or "none" for unassigned.
fn format_option(value: Option<i32>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn print_warning(message: impl std::fmt::Display) {
    println!("  {} {message}", "warning:".yellow().bold());
}
