//! Abilities derived from effective trait scores.
//!
//! Each ability is the average of two or three contributors, rounded up.

use std::fmt;

use qs_core::{TraitMap, TraitName};

use crate::error::{MechError, MechResult};

/// A value feeding into an ability average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityInput {
    /// One of the five traits, at its effective score.
    Trait(TraitName),
    /// Physical strength. Not one of the five traits and never recorded on
    /// the sheet, so it contributes 0 while still counting toward the average.
    Strength,
}

impl AbilityInput {
    fn value(self, scores: &TraitMap<i32>) -> i32 {
        match self {
            Self::Trait(name) => scores.get(name),
            Self::Strength => 0,
        }
    }
}

/// One of the twelve derived abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    /// Animal Handling.
    AnimalHandling,
    /// Athletics.
    Athletics,
    /// Flying.
    Flying,
    /// Intimidation.
    Intimidation,
    /// Investigation.
    Investigation,
    /// Perception.
    Perception,
    /// Performance.
    Performance,
    /// Persuasion.
    Persuasion,
    /// Potions.
    Potions,
    /// Sleight of Hand.
    SleightOfHand,
    /// Stealth.
    Stealth,
    /// Survival.
    Survival,
}

impl Ability {
    /// All abilities in display order.
    pub const ALL: [Ability; 12] = [
        Self::AnimalHandling,
        Self::Athletics,
        Self::Flying,
        Self::Intimidation,
        Self::Investigation,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Potions,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    /// The values averaged to produce this ability.
    pub fn inputs(self) -> &'static [AbilityInput] {
        use AbilityInput::{Strength, Trait};
        use TraitName::{Bravery, Knowledge, Loyalty, Magic, Mischief};

        match self {
            Self::AnimalHandling => &[Trait(Bravery), Trait(Knowledge), Trait(Loyalty)],
            Self::Athletics => &[Trait(Mischief), Strength],
            Self::Flying => &[Trait(Bravery), Strength, Trait(Magic)],
            Self::Intimidation => &[Trait(Bravery), Trait(Loyalty), Strength],
            Self::Investigation => &[Trait(Bravery), Trait(Knowledge)],
            Self::Perception => &[Trait(Mischief), Trait(Loyalty)],
            // No distinct formula has been published; shares Perception's.
            Self::Performance => &[Trait(Mischief), Trait(Loyalty)],
            Self::Persuasion => &[Trait(Knowledge), Trait(Loyalty)],
            Self::Potions => &[Trait(Knowledge), Trait(Magic)],
            Self::SleightOfHand => &[Trait(Mischief), Trait(Loyalty)],
            Self::Stealth => &[Trait(Mischief), Trait(Knowledge)],
            Self::Survival => &[Trait(Bravery), Trait(Knowledge)],
        }
    }

    /// Parse an ability from its display name or identifier, ignoring case,
    /// spaces, and underscores.
    pub fn parse(s: &str) -> MechResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|a| {
                let name: String = a
                    .to_string()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .collect();
                name == key
            })
            .ok_or_else(|| MechError::UnknownAbility(s.to_string()))
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AnimalHandling => "Animal Handling",
            Self::Athletics => "Athletics",
            Self::Flying => "Flying",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Potions => "Potions",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        };
        f.write_str(name)
    }
}

/// Average of the inputs, rounded toward positive infinity. No inputs is 0.
fn ceil_mean(values: &[i32]) -> i32 {
    if values.is_empty() {
        return 0;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    let n = values.len() as i64;
    let mean = sum.div_euclid(n) + i64::from(sum.rem_euclid(n) != 0);
    i32::try_from(mean).unwrap_or(if mean < 0 { i32::MIN } else { i32::MAX })
}

/// The score for one ability given the effective trait scores.
pub fn ability_score(ability: Ability, scores: &TraitMap<i32>) -> i32 {
    let values: Vec<i32> = ability.inputs().iter().map(|i| i.value(scores)).collect();
    ceil_mean(&values)
}

/// Scores for all twelve abilities, in display order.
pub fn abilities(scores: &TraitMap<i32>) -> Vec<(Ability, i32)> {
    Ability::ALL
        .into_iter()
        .map(|a| (a, ability_score(a, scores)))
        .collect()
}
