//! Effective trait scores: base + house bonus + year bonus, capped by year.
//!
//! Effective scores are always derived on demand and never stored, so they
//! cannot drift from the assignment and allocation they come from.

use qs_core::{TraitAssignment, TraitMap, TraitName, YearBonusAllocation};

use crate::rules::{House, house_bonus, max_trait_score};

/// The uncapped sum of base score, house bonus, and year bonus.
pub fn raw_score(
    name: TraitName,
    assignment: &TraitAssignment,
    allocation: &YearBonusAllocation,
    house: Option<House>,
) -> i64 {
    i64::from(assignment.get(name).unwrap_or(0))
        + i64::from(house_bonus(name, house))
        + i64::from(allocation.get(name))
}

/// The score shown for `name`, never above [`max_trait_score`] for the year.
pub fn effective_score(
    name: TraitName,
    assignment: &TraitAssignment,
    allocation: &YearBonusAllocation,
    house: Option<House>,
    year: i32,
) -> i32 {
    let capped =
        raw_score(name, assignment, allocation, house).min(i64::from(max_trait_score(year)));
    // bonuses are non-negative, so the result is never below the i32 base score
    i32::try_from(capped).unwrap_or(i32::MIN)
}

/// Effective scores for all five traits.
pub fn effective_scores(
    assignment: &TraitAssignment,
    allocation: &YearBonusAllocation,
    house: Option<House>,
    year: i32,
) -> TraitMap<i32> {
    TraitMap::from_fn(|name| effective_score(name, assignment, allocation, house, year))
}
