//! Integration health scoring.
//!
//! Reduces the issue list to a 0-100 score. Higher is healthier.

use crate::detect::{Issue, Severity};

/// Point deductions.
pub mod points {
    pub const ERROR: i32 = 20;
    pub const WARNING: i32 = 10;
    /// Applied once when no dependency declaration was found. A missing
    /// dependency also produces an error issue, so it is penalized twice.
    pub const SDK_MISSING: i32 = 30;
}

/// Starting score before deductions.
pub const MAX_SCORE: i32 = 100;

/// Score needed to pass when no threshold is configured.
pub const DEFAULT_THRESHOLD: i32 = 70;

/// Calculate the integration score from the issues of one run.
///
/// Info and success issues do not affect the score.
pub fn calculate(issues: &[Issue], sdk_found: bool) -> i32 {
    let mut score = MAX_SCORE;

    for issue in issues {
        score -= match issue.severity {
            Severity::Error => points::ERROR,
            Severity::Warning => points::WARNING,
            Severity::Info | Severity::Success => 0,
        };
    }

    if !sdk_found {
        score -= points::SDK_MISSING;
    }

    score.clamp(0, MAX_SCORE)
}

/// Whether a score clears the threshold.
pub fn passed(score: i32, threshold: i32) -> bool {
    score >= threshold
}
