use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the five core character traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitName {
    /// Courage in the face of danger.
    Bravery,
    /// Cunning and rule-bending.
    Mischief,
    /// Book learning and recall.
    Knowledge,
    /// Devotion to friends and house.
    Loyalty,
    /// Raw magical aptitude.
    Magic,
}

impl TraitName {
    /// All traits in display order.
    pub const ALL: [TraitName; 5] = [
        Self::Bravery,
        Self::Mischief,
        Self::Knowledge,
        Self::Loyalty,
        Self::Magic,
    ];

    /// The lowercase identifier used in saved records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bravery => "bravery",
            Self::Mischief => "mischief",
            Self::Knowledge => "knowledge",
            Self::Loyalty => "loyalty",
            Self::Magic => "magic",
        }
    }

    /// Parse a trait from its identifier, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownTrait(s.to_string()))
    }
}

impl fmt::Display for TraitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bravery => "Bravery",
            Self::Mischief => "Mischief",
            Self::Knowledge => "Knowledge",
            Self::Loyalty => "Loyalty",
            Self::Magic => "Magic",
        };
        f.write_str(name)
    }
}

/// A value for each of the five traits.
///
/// Serializes as an object keyed by the lowercase trait names. Keys missing
/// from a saved record, or holding `null`, fall back to `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct TraitMap<T> {
    /// Value for [`TraitName::Bravery`].
    #[serde(deserialize_with = "null_as_default")]
    pub bravery: T,
    /// Value for [`TraitName::Mischief`].
    #[serde(deserialize_with = "null_as_default")]
    pub mischief: T,
    /// Value for [`TraitName::Knowledge`].
    #[serde(deserialize_with = "null_as_default")]
    pub knowledge: T,
    /// Value for [`TraitName::Loyalty`].
    #[serde(deserialize_with = "null_as_default")]
    pub loyalty: T,
    /// Value for [`TraitName::Magic`].
    #[serde(deserialize_with = "null_as_default")]
    pub magic: T,
}

/// Read a value, treating an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Base scores drawn from the pool; `None` means unassigned.
pub type TraitAssignment = TraitMap<Option<i32>>;

/// Year bonus points committed to each trait.
pub type YearBonusAllocation = TraitMap<u32>;

impl<T> TraitMap<T> {
    /// Build a map by evaluating `f` for every trait.
    pub fn from_fn(mut f: impl FnMut(TraitName) -> T) -> Self {
        Self {
            bravery: f(TraitName::Bravery),
            mischief: f(TraitName::Mischief),
            knowledge: f(TraitName::Knowledge),
            loyalty: f(TraitName::Loyalty),
            magic: f(TraitName::Magic),
        }
    }

    /// Borrow the value for one trait.
    pub fn get_ref(&self, name: TraitName) -> &T {
        match name {
            TraitName::Bravery => &self.bravery,
            TraitName::Mischief => &self.mischief,
            TraitName::Knowledge => &self.knowledge,
            TraitName::Loyalty => &self.loyalty,
            TraitName::Magic => &self.magic,
        }
    }

    fn slot_mut(&mut self, name: TraitName) -> &mut T {
        match name {
            TraitName::Bravery => &mut self.bravery,
            TraitName::Mischief => &mut self.mischief,
            TraitName::Knowledge => &mut self.knowledge,
            TraitName::Loyalty => &mut self.loyalty,
            TraitName::Magic => &mut self.magic,
        }
    }

    /// Return a copy of this map with one trait's value replaced.
    pub fn with(mut self, name: TraitName, value: T) -> Self {
        *self.slot_mut(name) = value;
        self
    }

    /// Iterate over `(trait, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitName, &T)> {
        TraitName::ALL.into_iter().map(move |t| (t, self.get_ref(t)))
    }
}

impl<T: Copy> TraitMap<T> {
    /// The value for one trait.
    pub fn get(&self, name: TraitName) -> T {
        *self.get_ref(name)
    }
}

impl YearBonusAllocation {
    /// Total points committed across all traits.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, v)| u64::from(*v)).sum()
    }
}
