use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use qs_core::{EditorConfig, TraitName};
use qs_mechanics::TraitSheet;

pub fn run(config: &EditorConfig) -> Result<(), String> {
    let character = super::load_for_display(config)?;
    let sheet = TraitSheet::from_character(&character);
    let cap = sheet.max_trait_score();

    let house = sheet
        .house
        .map_or_else(|| "no house".to_string(), |h| h.to_string());
    println!(
        "  {} [{}, year {}]",
        character.character_name.bold(),
        house.dimmed(),
        sheet.year
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Trait", "Base", "House", "Year Bonus", "Effective"]);

    for name in TraitName::ALL {
        let base = super::format_option(sheet.traits.get(name));
        let house_bonus = if sheet.house_bonus(name) > 0 { "+1" } else { "" };
        let year_bonus = sheet.year_bonus_allocations.get(name).to_string();
        let effective = sheet.effective_score(name);
        let effective = if sheet.raw_score(name) > i64::from(cap) {
            format!("{effective} (max {cap})")
        } else {
            effective.to_string()
        };
        table.add_row(vec![
            name.to_string(),
            base,
            house_bonus.to_string(),
            year_bonus,
            effective,
        ]);
    }

    println!("{table}");
    println!();

    let unclaimed: Vec<String> = sheet.available_pool().iter().map(i32::to_string).collect();
    if unclaimed.is_empty() {
        println!("  Pool:       all base scores assigned");
    } else {
        println!("  Pool:       {}", unclaimed.join(", "));
    }
    println!("  Max score:  {cap}");

    let budget = sheet.budget();
    if budget.is_active() {
        println!("  Year bonus: {budget}");
    }
    if let Some(over) = budget.overdrawn() {
        super::print_warning(format!("{over} points over budget"));
    }

    Ok(())
}
