use qs_core::EditorConfig;
use qs_mechanics::House;

pub fn run(config: &EditorConfig, house: &str) -> Result<(), String> {
    let house = if house.trim().is_empty() || house.trim().eq_ignore_ascii_case("none") {
        None
    } else {
        Some(House::parse(house).map_err(|e| e.to_string())?)
    };

    let (store, mut character) = super::load(config)?;
    character.academy_house = house.map(|h| h.to_string()).unwrap_or_default();
    super::save(&store, &character)?;

    match house {
        Some(h) => println!(
            "  {} joined the {h} (+1 {}).",
            character.character_name,
            h.bonus_trait()
        ),
        None => println!("  {} has no house.", character.character_name),
    }

    Ok(())
}
