#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The built-in catalog and the `Rubric` container.
pub mod catalog;
/// Criteria and pattern matching.
pub mod criterion;
/// Running a rubric over submitted text.
pub mod engine;
/// Remediation hints for failed criteria.
pub mod feedback;
/// Per-criterion and aggregate grading results.
pub mod results;

pub use catalog::Rubric;
pub use criterion::{Criterion, CriterionSpec, MatchKind, matches};
pub use engine::grade;
pub use feedback::suggestions;
pub use results::{CriterionResult, GradeReport, LetterGrade};

/// Errors raised while building a rubric. These point at a broken catalog,
/// not at a bad submission.
#[derive(thiserror::Error, Debug)]
pub enum RubricError {
    /// A `Regex` criterion carries a pattern that does not compile.
    #[error("Criterion `{name}` has an invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Name of the offending criterion.
        name:    String,
        /// The pattern as written.
        pattern: String,
        /// Compiler error from the regex crate.
        #[source]
        source:  regex::Error,
    },
    /// A criterion is worth nothing.
    #[error("Criterion `{0}` must be worth at least one point")]
    ZeroPoints(String),
    /// Two criteria share a name.
    #[error("Criterion name `{0}` is used more than once")]
    DuplicateName(String),
    /// Adding this criterion pushes the rubric total past `u32::MAX`.
    #[error("Criterion `{0}` pushes the rubric's maximum score past {max}", max = u32::MAX)]
    ScoreOverflow(String),
}
