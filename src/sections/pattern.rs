//! Pattern analysis section - scores how guessable a password is.

use super::{SectionResult, MIN_LENGTH};
use crate::common::CommonPasswords;

const COMMON_PENALTY: f64 = 0.5;
const YEAR_SUFFIX_PENALTY: f64 = 0.2;
const KEYBOARD_RUN_PENALTY: f64 = 0.3;
const SHORT_PENALTY: f64 = 0.2;

/// Predictability above this triggers the "avoid common patterns" advisory.
pub const PATTERN_FEEDBACK_THRESHOLD: f64 = 0.5;

const KEYBOARD_RUNS: [&str; 5] = ["123", "abc", "qwe", "asd", "zxc"];

/// Sums the independent predictability penalties for `password`.
///
/// The result is not clamped: a common, short password ending in a year can
/// exceed 1.0.
pub fn predictability_section(password: &str, length: usize, common: &CommonPasswords) -> f64 {
    let lowered = password.to_lowercase();
    let mut predictability = 0.0;

    if common.contains(&lowered) {
        predictability += COMMON_PENALTY;
    }
    if ends_with_year(password) {
        predictability += YEAR_SUFFIX_PENALTY;
    }
    if KEYBOARD_RUNS.iter().any(|run| lowered.contains(run)) {
        predictability += KEYBOARD_RUN_PENALTY;
    }
    if length < MIN_LENGTH {
        predictability += SHORT_PENALTY;
    }

    predictability
}

/// Advisory for a predictability score.
pub fn pattern_section(predictability: f64) -> SectionResult {
    if predictability > PATTERN_FEEDBACK_THRESHOLD {
        return Some("Avoid common patterns or words.");
    }
    None
}

// Last four characters are ASCII digits (a year, a PIN). A trailing newline
// is not skipped.
fn ends_with_year(password: &str) -> bool {
    let mut tail = password.chars().rev().take(4);
    tail.clone().count() == 4 && tail.all(|c| c.is_ascii_digit())
}
