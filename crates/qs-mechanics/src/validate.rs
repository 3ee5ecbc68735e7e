//! Consistency checks over a loaded character.
//!
//! The engine never produces an invalid sheet on its own, but a record can
//! still arrive in one: hand-edited JSON, or a year or house change that
//! leaves earlier allocations unaffordable. These checks report such states
//! without altering anything.

use qs_core::{Character, TraitName};

use crate::pool::BASE_SCORE_POOL;
use crate::rules::House;
use crate::sheet::TraitSheet;

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What the issue is about: a trait name, "year", "house", or "pool".
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }

    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: true,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Validate a trait sheet.
///
/// Reports base scores that could not have come from the pool (error),
/// an overdrawn year bonus budget, traits whose score is being clipped by
/// the year's ceiling, and a year outside 1-7 (warnings).
pub fn validate_sheet(sheet: &TraitSheet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_pool(sheet, &mut issues);

    if !(1..=7).contains(&sheet.year) {
        issues.push(ValidationIssue::warning(
            "year",
            format!("year {} is outside 1-7", sheet.year),
        ));
    }

    if let Some(over) = sheet.budget().overdrawn() {
        issues.push(ValidationIssue::warning(
            "year bonus",
            format!("{over} points over budget"),
        ));
    }

    let cap = sheet.max_trait_score();
    for name in TraitName::ALL {
        let raw = sheet.raw_score(name);
        if raw > i64::from(cap) {
            issues.push(ValidationIssue::warning(
                name.as_str(),
                format!("score {raw} exceeds max ({cap}); shown as {cap}"),
            ));
        }
    }

    issues
}

/// Validate a character record, including fields the sheet does not keep.
pub fn validate_character(character: &Character) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let house = character.academy_house.trim();
    if !house.is_empty() && House::from_record(house).is_none() {
        issues.push(ValidationIssue::warning(
            "house",
            format!("unrecognised house \"{house}\" grants no bonus"),
        ));
    }

    issues.extend(validate_sheet(&TraitSheet::from_character(character)));
    issues
}

/// Every assigned base score must consume a distinct pool element.
fn validate_pool(sheet: &TraitSheet, issues: &mut Vec<ValidationIssue>) {
    let mut pool = BASE_SCORE_POOL.to_vec();
    for (name, value) in sheet.traits.iter() {
        let Some(v) = *value else {
            continue;
        };
        match pool.iter().position(|&p| p == v) {
            Some(index) => {
                pool.remove(index);
            }
            None => issues.push(ValidationIssue::error(
                name.as_str(),
                format!("base score {v} is not available in the pool"),
            )),
        }
    }
}
