use qs_core::EditorConfig;
use qs_mechanics::{MechError, TraitSheet};

pub fn run(config: &EditorConfig, name: &str, value: &str) -> Result<(), String> {
    let name = super::parse_trait(name)?;
    let value = parse_value(value)?;
    let (store, character) = super::load(config)?;
    let sheet = TraitSheet::from_character(&character);

    match sheet.try_with_base_score(name, value) {
        Ok(next) => {
            super::save(&store, &next.apply_to(character))?;
            match value {
                Some(v) => println!("  {name} base score set to {v}."),
                None => println!("  {name} base score cleared."),
            }
            let pool: Vec<String> = next.available_pool().iter().map(i32::to_string).collect();
            if !pool.is_empty() {
                println!("  Still available: {}", pool.join(", "));
            }
        }
        Err(MechError::ScoreNotOffered { name, value }) => {
            tracing::debug!("Rejected base score {value} for {name}");
            let options: Vec<String> = sheet
                .options_for(name)
                .into_iter()
                .map(super::format_option)
                .collect();
            println!("  {value} is not available for {name}; unchanged.");
            println!("  Options: {}", options.join(", "));
        }
        Err(e) => return Err(e.to_string()),
    }

    Ok(())
}

fn parse_value(value: &str) -> Result<Option<i32>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| format!("invalid base score: \"{value}\""))
}
