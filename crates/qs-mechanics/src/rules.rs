//! Static bonus tables: house affinities and year-dependent limits.

use std::fmt;

use qs_core::TraitName;

use crate::error::{MechError, MechResult};

/// One of the four academy houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// House of Valor.
    Valor,
    /// House of Ambition.
    Ambition,
    /// House of Wit.
    Wit,
    /// House of Loyalty.
    Loyalty,
}

impl House {
    /// All houses.
    pub const ALL: [House; 4] = [Self::Valor, Self::Ambition, Self::Wit, Self::Loyalty];

    /// The trait this house grants +1 to.
    pub fn bonus_trait(self) -> TraitName {
        match self {
            Self::Valor => TraitName::Bravery,
            Self::Ambition => TraitName::Mischief,
            Self::Wit => TraitName::Knowledge,
            Self::Loyalty => TraitName::Loyalty,
        }
    }

    /// Parse "House of Valor", "house of valor" or plain "valor".
    pub fn parse(s: &str) -> MechResult<Self> {
        let lower = s.trim().to_lowercase();
        let short = lower.strip_prefix("house of ").unwrap_or(&lower).trim();
        match short {
            "valor" => Ok(Self::Valor),
            "ambition" => Ok(Self::Ambition),
            "wit" => Ok(Self::Wit),
            "loyalty" => Ok(Self::Loyalty),
            _ => Err(MechError::UnknownHouse(s.to_string())),
        }
    }

    /// Interpret a record's free-text house field. Anything unrecognised is no house.
    pub fn from_record(s: &str) -> Option<Self> {
        Self::parse(s).ok()
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valor => write!(f, "House of Valor"),
            Self::Ambition => write!(f, "House of Ambition"),
            Self::Wit => write!(f, "House of Wit"),
            Self::Loyalty => write!(f, "House of Loyalty"),
        }
    }
}

/// The trait that receives a house bonus, if any.
pub fn house_bonus_trait(house: Option<House>) -> Option<TraitName> {
    house.map(House::bonus_trait)
}

/// The house bonus (0 or 1) that applies to `name`.
pub fn house_bonus(name: TraitName, house: Option<House>) -> i32 {
    i32::from(house_bonus_trait(house) == Some(name))
}

/// The ceiling on any effective trait score for a given year.
///
/// Defined for every integer: anything up to year 5 (including nonsense
/// like 0 or negatives) is 3, year 6 is 4, year 7 and beyond is 5.
pub fn max_trait_score(year: i32) -> i32 {
    match year {
        ..=5 => 3,
        6 => 4,
        _ => 5,
    }
}

/// Year bonus points available to spend: one per year after the first.
pub fn total_year_bonus_points(year: i32) -> u32 {
    u32::try_from(year.saturating_sub(1)).unwrap_or(0)
}
