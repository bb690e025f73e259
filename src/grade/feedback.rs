#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::results::CriterionResult;

/// One remediation hint per failed result, in the order given.
///
/// An empty list means nothing failed.
pub fn suggestions(results: &[CriterionResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| {
            if r.suggestion.is_empty() {
                format!("Review the `{}` requirement", r.criterion_name)
            } else {
                r.suggestion.clone()
            }
        })
        .collect()
}
