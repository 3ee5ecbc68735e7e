//! Trait-scoring engine for Quillsheet.
//!
//! Distributes a fixed pool of base scores across the five traits, layers
//! house and year bonuses on top under budget and ceiling constraints, and
//! derives the capped effective scores and the abilities built from them.
//! Every operation is a pure function over a snapshot of the character's
//! trait state; edits produce a new snapshot instead of mutating the old one.

pub mod ability;
pub mod bonus;
pub mod effective;
pub mod error;
pub mod pool;
pub mod rules;
pub mod sheet;
pub mod validate;

pub use ability::{Ability, AbilityInput, ability_score, abilities};
pub use bonus::{
    AllocationContext, AllocationOutcome, AllocationWarning, BudgetStatus, remaining_budget,
    set_allocation,
};
pub use effective::{effective_score, effective_scores, raw_score};
pub use error::{MechError, MechResult};
pub use pool::{BASE_SCORE_POOL, available_pool, options_for, set_base_score, try_set_base_score};
pub use rules::{House, house_bonus, house_bonus_trait, max_trait_score, total_year_bonus_points};
pub use sheet::TraitSheet;
pub use validate::{ValidationIssue, validate_character, validate_sheet};
