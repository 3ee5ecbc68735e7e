use qs_core::EditorConfig;
use qs_mechanics::TraitSheet;

pub fn run(config: &EditorConfig, name: &str, points: i64) -> Result<(), String> {
    let name = super::parse_trait(name)?;
    let (store, character) = super::load(config)?;
    let sheet = TraitSheet::from_character(&character);

    let (next, outcome) = sheet.allocate(name, points);
    if let Some(warning) = &outcome.warning {
        super::print_warning(warning);
    }

    super::save(&store, &next.apply_to(character))?;

    println!(
        "  {name} year bonus: {} (effective {})",
        outcome.points,
        next.effective_score(name)
    );
    println!("  Year bonus: {}", next.budget());

    Ok(())
}
