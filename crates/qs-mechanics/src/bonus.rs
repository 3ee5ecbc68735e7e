//! Year bonus budgeting and allocation.
//!
//! A character earns one bonus point per school year after the first and
//! spends them on traits. Two limits apply to every increase: the total
//! budget, and the per-trait ceiling from [`max_trait_score`]. Requests
//! that break either limit are clamped to the nearest legal value and
//! reported through an advisory [`AllocationWarning`]; nothing is refused.

use std::fmt;

use qs_core::{TraitAssignment, TraitName, YearBonusAllocation};

use crate::rules::{House, house_bonus, max_trait_score, total_year_bonus_points};

/// Points left to spend. Negative when the record is already over budget.
pub fn remaining_budget(year: i32, allocation: &YearBonusAllocation) -> i64 {
    i64::from(total_year_bonus_points(year)) - allocation.total() as i64
}

/// Summary of the year bonus budget for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    /// Points granted by the current year.
    pub total: u32,
    /// Points committed across all traits.
    pub allocated: u64,
    /// `total - allocated`; negative when over budget.
    pub remaining: i64,
}

impl BudgetStatus {
    /// Compute the budget for a year and allocation.
    pub fn of(year: i32, allocation: &YearBonusAllocation) -> Self {
        Self {
            total: total_year_bonus_points(year),
            allocated: allocation.total(),
            remaining: remaining_budget(year, allocation),
        }
    }

    /// Whether the year grants any bonus points at all.
    pub fn is_active(&self) -> bool {
        self.total > 0
    }

    /// How many points more than available have been allocated, if any.
    ///
    /// Existing allocations are never trimmed automatically; this is the
    /// number to show the user until they fix it themselves.
    pub fn overdrawn(&self) -> Option<u64> {
        (self.remaining < 0).then_some(self.remaining.unsigned_abs())
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(over) = self.overdrawn() {
            write!(f, "You have allocated {over} points more than available!")
        } else if self.remaining == 0 && self.allocated > 0 {
            write!(f, "All {} points utilized!", self.total)
        } else {
            write!(f, "{} available / {} total", self.remaining, self.total)
        }
    }
}

/// An advisory notice produced while clamping an allocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationWarning {
    /// The increase was larger than the points left in the budget.
    BudgetExceeded {
        /// Points that were left when the request was made.
        remaining: i64,
    },
    /// The increase would have pushed the trait past the year's ceiling.
    CapExceeded {
        /// The ceiling for the current year.
        cap: i32,
        /// Points the caller asked for.
        requested: i64,
        /// Points actually committed.
        applied: u32,
    },
}

impl fmt::Display for AllocationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExceeded { remaining } => write!(
                f,
                "Not enough year bonus points remaining! Only {remaining} points left."
            ),
            Self::CapExceeded {
                cap,
                requested,
                applied,
            } => write!(
                f,
                "Allocating {requested} points would exceed the max trait score of {cap}. Capped to {applied}."
            ),
        }
    }
}

/// Everything [`set_allocation`] needs to know about the trait being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationContext {
    /// The trait's base score, if assigned.
    pub base_score: Option<i32>,
    /// The house bonus applying to the trait (0 or 1).
    pub house_bonus: i32,
    /// The full allocation before this edit.
    pub allocation: YearBonusAllocation,
    /// The character's school year.
    pub year: i32,
}

impl AllocationContext {
    /// Gather the context for `name` from the character's trait state.
    pub fn for_trait(
        name: TraitName,
        traits: &TraitAssignment,
        allocation: &YearBonusAllocation,
        house: Option<House>,
        year: i32,
    ) -> Self {
        Self {
            base_score: traits.get(name),
            house_bonus: house_bonus(name, house),
            allocation: *allocation,
            year,
        }
    }

    /// Base plus house bonus, before any year bonus.
    pub fn score_before_bonus(&self) -> i64 {
        i64::from(self.base_score.unwrap_or(0)) + i64::from(self.house_bonus)
    }
}

/// The result of an allocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    /// Points committed to the trait after clamping.
    pub points: u32,
    /// Advisory notice naming the limit that decided `points`, if any did.
    pub warning: Option<AllocationWarning>,
    /// The new allocation map with `points` committed.
    pub allocation: YearBonusAllocation,
}

impl AllocationOutcome {
    /// True if the request was committed as asked.
    pub fn is_exact(&self) -> bool {
        self.warning.is_none()
    }
}

/// Commit `requested` year bonus points to `name`, clamping as needed.
///
/// Negative requests count as 0. Decreases are always accepted as asked.
/// Increases are limited by the remaining budget and, independently, by
/// the year's trait ceiling. The smaller limit wins and its warning is
/// returned; when both limits land on the same value the ceiling is named.
pub fn set_allocation(
    name: TraitName,
    requested: i64,
    ctx: &AllocationContext,
) -> AllocationOutcome {
    let requested = requested.max(0);
    let prior = i64::from(ctx.allocation.get(name));
    let mut points = requested;
    let mut warning = None;

    if requested > prior {
        let remaining = remaining_budget(ctx.year, &ctx.allocation);
        let budget_limit = if remaining < requested - prior {
            prior + remaining.max(0)
        } else {
            requested
        };

        let score_before = ctx.score_before_bonus();
        let cap = max_trait_score(ctx.year);
        let cap_limit = if score_before + requested > i64::from(cap) {
            (i64::from(cap) - score_before).max(0)
        } else {
            requested
        };

        points = budget_limit.min(cap_limit);
        if cap_limit < requested && cap_limit <= budget_limit {
            warning = Some(AllocationWarning::CapExceeded {
                cap,
                requested,
                applied: to_points(points),
            });
        } else if budget_limit < requested {
            warning = Some(AllocationWarning::BudgetExceeded { remaining });
        }
    }

    let points = to_points(points);
    if warning.is_some() {
        tracing::debug!("Clamped {name} year bonus from {requested} to {points}");
    }

    AllocationOutcome {
        points,
        warning,
        allocation: ctx.allocation.with(name, points),
    }
}

/// Narrow a clamped point count. Clamped values never exceed the budget,
/// which is itself a `u32`.
fn to_points(points: i64) -> u32 {
    u32::try_from(points.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ctx(
        base: Option<i32>,
        house_bonus: i32,
        allocation: YearBonusAllocation,
        year: i32,
    ) -> AllocationContext {
        AllocationContext {
            base_score: base,
            house_bonus,
            allocation,
            year,
        }
    }

    #[test]
    fn remaining_budget_counts_down() {
        let alloc = YearBonusAllocation::default().with(TraitName::Bravery, 2);
        assert_eq!(remaining_budget(4, &alloc), 1);
        assert_eq!(remaining_budget(1, &YearBonusAllocation::default()), 0);
    }

    #[test]
    fn remaining_budget_can_go_negative() {
        let alloc = YearBonusAllocation::default()
            .with(TraitName::Bravery, 2)
            .with(TraitName::Magic, 2);
        assert_eq!(remaining_budget(3, &alloc), -2);
    }

    #[test]
    fn cap_clamp_scenario() {
        // year 3: budget 2, cap 3; loyalty already at 1 before bonuses
        let c = ctx(Some(0), 1, YearBonusAllocation::default(), 3);
        let out = set_allocation(TraitName::Loyalty, 5, &c);
        assert_eq!(out.points, 2);
        // the budget also allows exactly 2, so the ceiling is the one named
        assert_eq!(
            out.warning,
            Some(AllocationWarning::CapExceeded {
                cap: 3,
                requested: 5,
                applied: 2,
            })
        );
        assert_eq!(out.allocation.get(TraitName::Loyalty), 2);
    }

    #[test]
    fn budget_clamp_scenario() {
        // year 4: budget 3, two already on bravery
        let alloc = YearBonusAllocation::default().with(TraitName::Bravery, 2);
        let c = ctx(None, 0, alloc, 4);
        let out = set_allocation(TraitName::Mischief, 5, &c);
        assert_eq!(out.points, 1);
        // the ceiling would still allow 3, so only the budget is blamed
        assert_eq!(
            out.warning,
            Some(AllocationWarning::BudgetExceeded { remaining: 1 })
        );
        assert_eq!(out.allocation.total(), 3);
    }

    #[test]
    fn exact_request_has_no_warnings() {
        let c = ctx(Some(1), 0, YearBonusAllocation::default(), 3);
        let out = set_allocation(TraitName::Magic, 2, &c);
        assert_eq!(out.points, 2);
        assert!(out.is_exact());
    }

    #[test]
    fn decrease_is_accepted_unmodified() {
        let alloc = YearBonusAllocation::default().with(TraitName::Magic, 3);
        // over the cap and over budget, but decreasing is always fine
        let c = ctx(Some(2), 0, alloc, 2);
        let out = set_allocation(TraitName::Magic, 2, &c);
        assert_eq!(out.points, 2);
        assert!(out.is_exact());
    }

    #[test]
    fn negative_request_clamps_to_zero() {
        let alloc = YearBonusAllocation::default().with(TraitName::Magic, 1);
        let c = ctx(None, 0, alloc, 3);
        let out = set_allocation(TraitName::Magic, -4, &c);
        assert_eq!(out.points, 0);
        assert!(out.is_exact());
    }

    #[test]
    fn first_year_has_no_budget() {
        let c = ctx(None, 0, YearBonusAllocation::default(), 1);
        let out = set_allocation(TraitName::Bravery, 1, &c);
        assert_eq!(out.points, 0);
        assert_eq!(
            out.warning,
            Some(AllocationWarning::BudgetExceeded { remaining: 0 })
        );
    }

    #[test]
    fn over_budget_increase_keeps_prior() {
        let alloc = YearBonusAllocation::default()
            .with(TraitName::Bravery, 3)
            .with(TraitName::Magic, 1);
        let c = ctx(None, 0, alloc, 3);
        let out = set_allocation(TraitName::Magic, 2, &c);
        assert_eq!(out.points, 1);
        assert_eq!(
            out.warning,
            Some(AllocationWarning::BudgetExceeded { remaining: -2 })
        );
    }

    #[test]
    fn base_already_at_cap_allows_nothing() {
        let c = ctx(Some(2), 1, YearBonusAllocation::default(), 5);
        let out = set_allocation(TraitName::Bravery, 1, &c);
        assert_eq!(out.points, 0);
        assert_eq!(
            out.warning,
            Some(AllocationWarning::CapExceeded {
                cap: 3,
                requested: 1,
                applied: 0,
            })
        );
    }

    #[test]
    fn tighter_cap_beats_budget() {
        // year 5: budget 4, cap 3; magic already at 2 before bonuses
        let c = ctx(Some(2), 0, YearBonusAllocation::default(), 5);
        let out = set_allocation(TraitName::Magic, 6, &c);
        assert_eq!(out.points, 1);
        assert_eq!(
            out.warning,
            Some(AllocationWarning::CapExceeded {
                cap: 3,
                requested: 6,
                applied: 1,
            })
        );
    }

    #[test]
    fn tighter_budget_beats_cap() {
        // year 7: budget 6 with 5 spent, cap 5; knowledge starts at 0
        let alloc = YearBonusAllocation::default().with(TraitName::Bravery, 5);
        let c = ctx(Some(0), 0, alloc, 7);
        let out = set_allocation(TraitName::Knowledge, 9, &c);
        assert_eq!(out.points, 1);
        assert_eq!(
            out.warning,
            Some(AllocationWarning::BudgetExceeded { remaining: 1 })
        );
    }

    #[test]
    fn context_for_trait_picks_house_bonus() {
        let traits = TraitAssignment::default().with(TraitName::Bravery, Some(2));
        let alloc = YearBonusAllocation::default();
        let c = AllocationContext::for_trait(
            TraitName::Bravery,
            &traits,
            &alloc,
            Some(House::Valor),
            2,
        );
        assert_eq!(c.base_score, Some(2));
        assert_eq!(c.house_bonus, 1);
        assert_eq!(c.score_before_bonus(), 3);
    }

    #[test]
    fn budget_status_messages() {
        let empty = YearBonusAllocation::default();
        assert_eq!(BudgetStatus::of(4, &empty).to_string(), "3 available / 3 total");

        let full = empty.with(TraitName::Knowledge, 3);
        assert_eq!(BudgetStatus::of(4, &full).to_string(), "All 3 points utilized!");

        let over = BudgetStatus::of(2, &full);
        assert_eq!(over.overdrawn(), Some(2));
        assert_eq!(
            over.to_string(),
            "You have allocated 2 points more than available!"
        );
        assert!(!BudgetStatus::of(1, &empty).is_active());
    }

    #[test]
    fn warning_messages() {
        let w = AllocationWarning::BudgetExceeded { remaining: 1 };
        assert_eq!(
            w.to_string(),
            "Not enough year bonus points remaining! Only 1 points left."
        );
        let w = AllocationWarning::CapExceeded {
            cap: 3,
            requested: 5,
            applied: 2,
        };
        assert!(w.to_string().contains("max trait score of 3"));
    }

    fn trait_strategy() -> impl Strategy<Value = TraitName> {
        prop::sample::select(TraitName::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn budget_and_cap_always_hold(
            year in 1i32..=7,
            base in prop::option::of(-1i32..=2),
            house_bonus in 0i32..=1,
            requests in prop::collection::vec((trait_strategy(), -3i64..=9), 0..30),
        ) {
            let total = u64::from(total_year_bonus_points(year));
            let cap = i64::from(max_trait_score(year));
            let mut alloc = YearBonusAllocation::default();
            for (name, requested) in requests {
                let c = ctx(base, house_bonus, alloc, year);
                let out = set_allocation(name, requested, &c);
                alloc = out.allocation;
                prop_assert!(alloc.total() <= total);
                prop_assert_eq!(alloc.get(name), out.points);
                if requested > i64::from(c.allocation.get(name)) {
                    prop_assert!(
                        c.score_before_bonus() + i64::from(out.points) <= cap
                            || out.points <= c.allocation.get(name)
                    );
                }
            }
        }
    }
}
