//! Suggestion generation.

use super::issues::Issue;

/// Maps each issue, in order, to its remediation suggestion.
///
/// Output order follows issue order. Duplicates are possible (the three
/// Open Graph issues share one suggestion text) and are deliberately not
/// deduplicated: the suggestion list mirrors the issue list one-to-one.
pub fn generate_suggestions(issues: &[Issue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| issue.suggestion().to_string())
        .collect()
}
