use qs_core::EditorConfig;
use qs_mechanics::TraitSheet;

pub fn run(config: &EditorConfig, name: &str) -> Result<(), String> {
    let name = super::parse_trait(name)?;
    let character = super::load_for_display(config)?;
    let sheet = TraitSheet::from_character(&character);

    let options: Vec<String> = sheet
        .options_for(name)
        .into_iter()
        .map(super::format_option)
        .collect();

    println!("  {name}: {}", options.join(", "));

    Ok(())
}
