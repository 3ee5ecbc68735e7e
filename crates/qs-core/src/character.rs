use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::{TraitAssignment, YearBonusAllocation, null_as_default};

/// A saved character record.
///
/// Only the fields the scoring engine reads are typed. Everything else the
/// editor stores (pronouns, wand, inventory, spells, backstory, ...) is kept
/// verbatim in [`Character::extra`] and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Character name.
    #[serde(default)]
    pub character_name: String,
    /// Name of the player who owns the character.
    #[serde(default)]
    pub player_name: String,
    /// School year (level), nominally 1 through 7.
    #[serde(default = "default_year")]
    pub year: i32,
    /// Free-text house affiliation, e.g. "House of Valor". Empty means none.
    #[serde(default)]
    pub academy_house: String,
    /// Base scores drawn from the pool.
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: TraitAssignment,
    /// Year bonus points committed per trait.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year_bonus_allocations: YearBonusAllocation,
    /// Every other field of the record, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_year() -> i32 {
    1
}

impl Character {
    /// Create a fresh first-year character with nothing assigned.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            character_name: name.into(),
            player_name: String::new(),
            year: default_year(),
            academy_house: String::new(),
            traits: TraitAssignment::default(),
            year_bonus_allocations: YearBonusAllocation::default(),
            extra: Map::new(),
        }
    }

    /// Set the owning player.
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player_name = player.into();
        self
    }

    /// Set the house affiliation text.
    pub fn with_house(mut self, house: impl Into<String>) -> Self {
        self.academy_house = house.into();
        self
    }

    /// Set the school year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitName;

    #[test]
    fn new_character_defaults() {
        let c = Character::new("Wren");
        assert_eq!(c.character_name, "Wren");
        assert_eq!(c.year, 1);
        assert!(c.academy_house.is_empty());
        assert_eq!(c.traits, TraitAssignment::default());
        assert_eq!(c.year_bonus_allocations.total(), 0);
    }

    #[test]
    fn reads_camel_case_record() {
        let json = r#"{
            "characterName": "Wren",
            "playerName": "Sam",
            "year": 3,
            "academyHouse": "House of Wit",
            "traits": {"bravery": 2, "mischief": null, "knowledge": 1,
                       "loyalty": null, "magic": null},
            "yearBonusAllocations": {"knowledge": 1}
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.year, 3);
        assert_eq!(c.academy_house, "House of Wit");
        assert_eq!(c.traits.get(TraitName::Bravery), Some(2));
        assert_eq!(c.traits.get(TraitName::Mischief), None);
        assert_eq!(c.year_bonus_allocations.get(TraitName::Knowledge), 1);
        assert!(c.extra.is_empty());
    }

    #[test]
    fn null_scores_read_as_defaults() {
        let json = r#"{
            "characterName": "Wren",
            "year": 2,
            "traits": null,
            "yearBonusAllocations": {"magic": null, "loyalty": 1}
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.traits, TraitAssignment::default());
        assert_eq!(c.year_bonus_allocations.get(TraitName::Magic), 0);
        assert_eq!(c.year_bonus_allocations.get(TraitName::Loyalty), 1);
        assert!(c.extra.is_empty());
    }

    #[test]
    fn unknown_fields_pass_through() {
        let json = r#"{
            "characterName": "Wren",
            "wand": "Holly, 11 inches",
            "inventory": [{"item": "Cauldron", "quantity": 1}]
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.extra["wand"], "Holly, 11 inches");

        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["inventory"][0]["item"], "Cauldron");
        assert_eq!(back["characterName"], "Wren");
        assert_eq!(back["year"], 1);
    }

    #[test]
    fn builder_methods() {
        let c = Character::new("Wren")
            .with_player("Sam")
            .with_house("House of Valor")
            .with_year(6);
        assert_eq!(c.player_name, "Sam");
        assert_eq!(c.academy_house, "House of Valor");
        assert_eq!(c.year, 6);
    }
}
