use qs_core::EditorConfig;
use qs_mechanics::validate_character;

pub fn run(config: &EditorConfig) -> Result<(), String> {
    let (_, character) = super::load(config)?;
    let issues = validate_character(&character);

    if issues.is_empty() {
        println!("  All checks passed for '{}'.", character.character_name);
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {issue}");
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ))
    } else {
        println!(
            "  {} warning{} for '{}'.",
            warnings,
            if warnings == 1 { "" } else { "s" },
            character.character_name
        );
        Ok(())
    }
}
