//! Score reduction.

use super::issues::Issue;

/// Reduces a list of issues to a single 0-100 score.
///
/// Starts at 100 and subtracts each issue's weight in order, clamping the
/// result at 0. The score is a pure function of the issue list: the same
/// issues always produce the same score, and adding an issue can never
/// raise it.
pub fn calculate_score(issues: &[Issue]) -> u32 {
    let deducted = issues
        .iter()
        .fold(100i64, |score, issue| score - i64::from(issue.weight()));
    deducted.max(0) as u32
}
