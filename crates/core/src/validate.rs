use serde::{Deserialize, Serialize};

use crate::board::GameType;

/// Largest score a submission may carry.
pub const SCORE_MAX: i64 = 999_999_999;

/// Shortest player name accepted, after trimming.
pub const NAME_MIN_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Error,
}

/// Outcome of checking a candidate submission. Failures are values, never
/// errors; the first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    pub severity: Severity,
}

impl ValidationResult {
    fn rejected(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    fn accepted(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: true,
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

/// Strict whole-string integer parse of a score field.
pub fn parse_score(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Checks a candidate submission against the live game-type collection.
/// Pure and synchronous; ordering of the checks is part of the contract.
pub fn validate(
    name: &str,
    raw_score: &str,
    game_type: Option<&str>,
    game_types: &[GameType],
) -> ValidationResult {
    let name = name.trim();
    if name.is_empty() {
        return ValidationResult::rejected("A player name is required");
    }
    if name.chars().count() < NAME_MIN_CHARS {
        return ValidationResult::rejected("Player names need at least 2 characters");
    }

    let raw_score = raw_score.trim();
    if raw_score.is_empty() {
        return ValidationResult::rejected("A score is required");
    }
    let Some(score) = parse_score(raw_score) else {
        return ValidationResult::rejected("The score must be a whole number");
    };
    if score < 0 {
        return ValidationResult::rejected("Scores cannot be negative");
    }
    if score > SCORE_MAX {
        return ValidationResult::rejected(format!("Scores cannot exceed {SCORE_MAX}"));
    }

    match game_type {
        Some(id) if game_types.iter().any(|g| g.id == id) => {}
        _ => return ValidationResult::rejected("Select a game first"),
    }

    ValidationResult::accepted(format!("Score recorded for {name}!"))
}
