//! Error types for the scoring engine.

use qs_core::TraitName;

/// Errors that can occur when interpreting user input for the engine.
///
/// The scoring operations themselves are total; these only arise when
/// parsing names or when a caller asks for the strict variant of an edit.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A house name did not match any of the four houses.
    #[error("unknown house: {0}")]
    UnknownHouse(String),

    /// An ability name did not match any of the twelve abilities.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A base score is not currently offered for the trait.
    #[error("{value} is not available for {name}")]
    ScoreNotOffered {
        /// The trait being assigned.
        name: TraitName,
        /// The rejected score.
        value: i32,
    },
}

/// Convenience result type for engine operations.
pub type MechResult<T> = Result<T, MechError>;
