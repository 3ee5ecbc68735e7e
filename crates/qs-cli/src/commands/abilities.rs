use comfy_table::{ContentArrangement, Table};
use qs_core::EditorConfig;
use qs_mechanics::{Ability, AbilityInput, TraitSheet};

pub fn run(config: &EditorConfig, name: Option<&str>) -> Result<(), String> {
    let character = super::load_for_display(config)?;
    let sheet = TraitSheet::from_character(&character);

    if let Some(name) = name {
        let ability = Ability::parse(name).map_err(|e| e.to_string())?;
        println!(
            "  {ability}: {} (from {})",
            sheet.ability_score(ability),
            describe_inputs(ability)
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Score", "From"]);

    for (ability, score) in sheet.abilities() {
        table.add_row(vec![
            ability.to_string(),
            score.to_string(),
            describe_inputs(ability),
        ]);
    }

    println!("{table}");

    Ok(())
}

fn describe_inputs(ability: Ability) -> String {
    let inputs: Vec<String> = ability
        .inputs()
        .iter()
        .map(|input| match input {
            AbilityInput::Trait(name) => name.to_string(),
            AbilityInput::Strength => "Strength".to_string(),
        })
        .collect();
    inputs.join(", ")
}
