//! The base score pool and per-trait selector options.
//!
//! Each element of [`BASE_SCORE_POOL`] can be held by at most one trait.
//! Option sets are recomputed from the full assignment on every call; the
//! input is five values, so nothing is cached.

use qs_core::{TraitAssignment, TraitName};

use crate::error::{MechError, MechResult};

/// The multiset of base scores distributed across the five traits.
pub const BASE_SCORE_POOL: [i32; 5] = [-1, 0, 1, 1, 2];

/// Remove one occurrence of `value` from `pool`, if present.
fn take_one(pool: &mut Vec<i32>, value: i32) {
    if let Some(index) = pool.iter().position(|&v| v == value) {
        pool.remove(index);
    }
}

/// Scores still unclaimed by any trait, sorted ascending.
pub fn available_pool(assignment: &TraitAssignment) -> Vec<i32> {
    let mut pool = BASE_SCORE_POOL.to_vec();
    for (_, value) in assignment.iter() {
        if let Some(v) = *value {
            take_one(&mut pool, v);
        }
    }
    pool.sort_unstable();
    pool
}

/// The values the selector for `name` may offer, unassigned (`None`) first.
///
/// Built from the pool minus everything held by the other traits. The
/// trait's own current value is always included so it can be kept.
pub fn options_for(name: TraitName, assignment: &TraitAssignment) -> Vec<Option<i32>> {
    let mut pool = BASE_SCORE_POOL.to_vec();
    for (other, value) in assignment.iter() {
        if other == name {
            continue;
        }
        if let Some(v) = *value {
            take_one(&mut pool, v);
        }
    }

    if let Some(own) = assignment.get(name) {
        if !pool.contains(&own) {
            pool.push(own);
        }
    }

    pool.sort_unstable();
    std::iter::once(None)
        .chain(pool.into_iter().map(Some))
        .collect()
}

/// Assign (or clear) the base score for `name`.
///
/// A value that is not currently offered by [`options_for`] is ignored and
/// the assignment is returned unchanged.
pub fn set_base_score(
    name: TraitName,
    value: Option<i32>,
    assignment: &TraitAssignment,
) -> TraitAssignment {
    match try_set_base_score(name, value, assignment) {
        Ok(next) => next,
        Err(e) => {
            tracing::debug!("Ignoring base score selection: {e}");
            *assignment
        }
    }
}

/// Like [`set_base_score`], but reports a value that is not on offer.
pub fn try_set_base_score(
    name: TraitName,
    value: Option<i32>,
    assignment: &TraitAssignment,
) -> MechResult<TraitAssignment> {
    if let Some(v) = value {
        if !options_for(name, assignment).contains(&Some(v)) {
            return Err(MechError::ScoreNotOffered { name, value: v });
        }
    }
    Ok(assignment.with(name, value))
}
