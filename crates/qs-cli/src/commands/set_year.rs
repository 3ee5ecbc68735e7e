use qs_core::EditorConfig;
use qs_mechanics::TraitSheet;

pub fn run(config: &EditorConfig, year: i32) -> Result<(), String> {
    let (store, mut character) = super::load(config)?;
    character.year = year;
    super::save(&store, &character)?;

    let sheet = TraitSheet::from_character(&character);
    println!(
        "  {} is now in year {year} (max trait score {}).",
        character.character_name,
        sheet.max_trait_score()
    );

    let budget = sheet.budget();
    if budget.is_active() {
        println!("  Year bonus: {budget}");
    }
    if let Some(over) = budget.overdrawn() {
        super::print_warning(format!("{over} points over budget"));
    }

    Ok(())
}
