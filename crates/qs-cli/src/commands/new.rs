use qs_core::{Character, EditorConfig, JsonFileStore};
use qs_mechanics::House;

pub fn run(
    config: &EditorConfig,
    name: &str,
    player: Option<&str>,
    house: Option<&str>,
    force: bool,
) -> Result<(), String> {
    if config.path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            config.path.display()
        ));
    }

    let mut character = Character::new(name).with_year(config.new_character_year);
    if let Some(player) = player {
        character = character.with_player(player);
    }
    if let Some(house) = house {
        let house = House::parse(house).map_err(|e| e.to_string())?;
        character = character.with_house(house.to_string());
    }

    let store = JsonFileStore::new(&config.path);
    super::save(&store, &character)?;

    println!(
        "Created '{}' (year {}) in {}",
        character.character_name,
        character.year,
        store.path().display()
    );
    println!();
    println!("Next steps:");
    println!("  qs options bravery    # See which base scores bravery can take");
    println!("  qs set-base bravery 2 # Assign a base score from the pool");
    println!("  qs show               # Review the whole sheet");

    Ok(())
}
