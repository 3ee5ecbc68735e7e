//! Core types for Quillsheet: traits, character records, and persistence.
//!
//! This crate defines the data model the scoring engine operates on. It is
//! independent of the engine itself: you can build a [`Character`]
//! programmatically or deserialize one from the JSON blob the editor saves.

/// The character record and its trait/bonus slice.
pub mod character;
/// Editor configuration (record location, defaults for new characters).
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Persistence seam for character records.
pub mod store;
/// Trait identifiers and the per-trait value map.
pub mod traits;

/// Re-export the character record.
pub use character::Character;
/// Re-export configuration.
pub use config::EditorConfig;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export persistence types.
pub use store::{CharacterStore, JsonFileStore, load_or_else};
/// Re-export trait types.
pub use traits::{TraitAssignment, TraitMap, TraitName, YearBonusAllocation};
