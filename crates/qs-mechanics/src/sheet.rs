//! The trait slice of a character record, as an immutable snapshot.
//!
//! A [`TraitSheet`] is lifted out of a [`Character`] with
//! [`TraitSheet::from_character`], edited by producing new sheets, and
//! written back in one step with [`TraitSheet::apply_to`].

use qs_core::{Character, TraitAssignment, TraitMap, TraitName, YearBonusAllocation};

use crate::ability::{self, Ability};
use crate::bonus::{self, AllocationContext, AllocationOutcome, BudgetStatus};
use crate::effective;
use crate::error::MechResult;
use crate::pool;
use crate::rules::{self, House};

/// Everything the scoring engine reads from a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitSheet {
    /// Base scores drawn from the pool.
    pub traits: TraitAssignment,
    /// Year bonus points per trait.
    pub year_bonus_allocations: YearBonusAllocation,
    /// House affiliation, if recognised.
    pub house: Option<House>,
    /// School year.
    pub year: i32,
}

impl Default for TraitSheet {
    fn default() -> Self {
        Self {
            traits: TraitAssignment::default(),
            year_bonus_allocations: YearBonusAllocation::default(),
            house: None,
            year: 1,
        }
    }
}

impl TraitSheet {
    /// Read the trait slice of a character record.
    ///
    /// An unrecognised house string is treated as no house.
    pub fn from_character(character: &Character) -> Self {
        Self {
            traits: character.traits,
            year_bonus_allocations: character.year_bonus_allocations,
            house: House::from_record(&character.academy_house),
            year: character.year,
        }
    }

    /// Write this snapshot's scores back into a character record.
    ///
    /// Only the base scores and allocations are written; house and year are
    /// owned by the record's header fields and left as they are.
    pub fn apply_to(&self, mut character: Character) -> Character {
        character.traits = self.traits;
        character.year_bonus_allocations = self.year_bonus_allocations;
        character
    }

    /// Selector options for one trait's base score.
    pub fn options_for(&self, name: TraitName) -> Vec<Option<i32>> {
        pool::options_for(name, &self.traits)
    }

    /// Pool values not yet claimed by any trait.
    pub fn available_pool(&self) -> Vec<i32> {
        pool::available_pool(&self.traits)
    }

    /// A new sheet with one base score changed; unoffered values are ignored.
    pub fn with_base_score(&self, name: TraitName, value: Option<i32>) -> Self {
        Self {
            traits: pool::set_base_score(name, value, &self.traits),
            ..*self
        }
    }

    /// A new sheet with one base score changed, or an error if it is not on offer.
    pub fn try_with_base_score(&self, name: TraitName, value: Option<i32>) -> MechResult<Self> {
        Ok(Self {
            traits: pool::try_set_base_score(name, value, &self.traits)?,
            ..*self
        })
    }

    /// The allocation context for `name` on this sheet.
    pub fn allocation_context(&self, name: TraitName) -> AllocationContext {
        AllocationContext::for_trait(
            name,
            &self.traits,
            &self.year_bonus_allocations,
            self.house,
            self.year,
        )
    }

    /// Request year bonus points for `name`; returns the new sheet and what happened.
    pub fn allocate(&self, name: TraitName, requested: i64) -> (Self, AllocationOutcome) {
        let outcome = bonus::set_allocation(name, requested, &self.allocation_context(name));
        let next = Self {
            year_bonus_allocations: outcome.allocation,
            ..*self
        };
        (next, outcome)
    }

    /// Points left in the year bonus budget (negative when overdrawn).
    pub fn remaining_budget(&self) -> i64 {
        bonus::remaining_budget(self.year, &self.year_bonus_allocations)
    }

    /// The year bonus budget summary.
    pub fn budget(&self) -> BudgetStatus {
        BudgetStatus::of(self.year, &self.year_bonus_allocations)
    }

    /// The ceiling on effective scores for this sheet's year.
    pub fn max_trait_score(&self) -> i32 {
        rules::max_trait_score(self.year)
    }

    /// The house bonus applying to `name` (0 or 1).
    pub fn house_bonus(&self, name: TraitName) -> i32 {
        rules::house_bonus(name, self.house)
    }

    /// The uncapped score for `name`.
    pub fn raw_score(&self, name: TraitName) -> i64 {
        effective::raw_score(name, &self.traits, &self.year_bonus_allocations, self.house)
    }

    /// The capped score for `name`.
    pub fn effective_score(&self, name: TraitName) -> i32 {
        effective::effective_score(
            name,
            &self.traits,
            &self.year_bonus_allocations,
            self.house,
            self.year,
        )
    }

    /// Capped scores for all traits.
    pub fn effective_scores(&self) -> TraitMap<i32> {
        effective::effective_scores(
            &self.traits,
            &self.year_bonus_allocations,
            self.house,
            self.year,
        )
    }

    /// The score for one ability.
    pub fn ability_score(&self, ability: Ability) -> i32 {
        ability::ability_score(ability, &self.effective_scores())
    }

    /// All ability scores in display order.
    pub fn abilities(&self) -> Vec<(Ability, i32)> {
        ability::abilities(&self.effective_scores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::AllocationWarning;

    fn sheet(house: Option<House>, year: i32) -> TraitSheet {
        TraitSheet {
            house,
            year,
            ..TraitSheet::default()
        }
    }

    #[test]
    fn from_character_reads_slice() {
        let mut c = Character::new("Wren").with_house("house of valor").with_year(3);
        c.traits = c.traits.with(TraitName::Bravery, Some(2));
        let s = TraitSheet::from_character(&c);
        assert_eq!(s.house, Some(House::Valor));
        assert_eq!(s.year, 3);
        assert_eq!(s.traits.get(TraitName::Bravery), Some(2));
    }

    #[test]
    fn unknown_house_reads_as_none() {
        let c = Character::new("Wren").with_house("House of Snakes");
        assert_eq!(TraitSheet::from_character(&c).house, None);
    }

    #[test]
    fn apply_to_replaces_scores_only() {
        let c = Character::new("Wren").with_house("House of Wit").with_year(2);
        let s = TraitSheet::from_character(&c)
            .with_base_score(TraitName::Knowledge, Some(1))
            .allocate(TraitName::Knowledge, 1)
            .0;
        let updated = s.apply_to(c.clone());
        assert_eq!(updated.traits.get(TraitName::Knowledge), Some(1));
        assert_eq!(updated.year_bonus_allocations.get(TraitName::Knowledge), 1);
        assert_eq!(updated.academy_house, c.academy_house);
        assert_eq!(updated.character_name, "Wren");
    }

    #[test]
    fn house_bonus_first_year() {
        let s = sheet(Some(House::Valor), 1).with_base_score(TraitName::Bravery, Some(2));
        assert_eq!(s.budget().total, 0);
        assert_eq!(s.effective_score(TraitName::Bravery), 3);
    }

    #[test]
    fn options_follow_edits() {
        let s = sheet(None, 1)
            .with_base_score(TraitName::Bravery, Some(2))
            .with_base_score(TraitName::Mischief, Some(1));
        assert_eq!(
            s.options_for(TraitName::Knowledge),
            vec![None, Some(-1), Some(0), Some(1)]
        );
        assert_eq!(s.available_pool(), vec![-1, 0, 1]);
    }

    #[test]
    fn rejected_edit_keeps_sheet() {
        let s = sheet(None, 1).with_base_score(TraitName::Bravery, Some(2));
        assert_eq!(s.with_base_score(TraitName::Magic, Some(2)), s);
        assert!(s.try_with_base_score(TraitName::Magic, Some(2)).is_err());
    }

    #[test]
    fn allocate_updates_sheet() {
        let s = sheet(None, 4).allocate(TraitName::Bravery, 2).0;
        assert_eq!(s.remaining_budget(), 1);

        let (s, outcome) = s.allocate(TraitName::Mischief, 5);
        assert_eq!(outcome.points, 1);
        assert_eq!(
            outcome.warning,
            Some(AllocationWarning::BudgetExceeded { remaining: 1 })
        );
        assert_eq!(s.remaining_budget(), 0);
    }

    #[test]
    fn year_change_can_overdraw() {
        let s = sheet(None, 4).allocate(TraitName::Magic, 3).0;
        let demoted = TraitSheet { year: 2, ..s };
        assert_eq!(demoted.remaining_budget(), -2);
        assert_eq!(demoted.budget().overdrawn(), Some(2));
        // nothing is trimmed automatically
        assert_eq!(demoted.year_bonus_allocations.get(TraitName::Magic), 3);
        assert_eq!(demoted.effective_score(TraitName::Magic), 3);
    }

    #[test]
    fn abilities_use_effective_scores() {
        let s = sheet(Some(House::Wit), 1)
            .with_base_score(TraitName::Knowledge, Some(2))
            .with_base_score(TraitName::Magic, Some(1));
        // knowledge 3 (with house), magic 1 -> potions 2
        assert_eq!(s.ability_score(Ability::Potions), 2);
        assert_eq!(s.abilities().len(), 12);
    }

    #[test]
    fn max_trait_score_tracks_year() {
        assert_eq!(sheet(None, 6).max_trait_score(), 4);
        assert_eq!(sheet(None, 0).max_trait_score(), 3);
    }
}
