#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

/// Letter grade derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LetterGrade {
    /// 90% and above.
    A,
    /// 80% up to 90%.
    B,
    /// 70% up to 80%.
    C,
    /// 60% up to 70%.
    D,
    /// Below 60%.
    F,
}

impl LetterGrade {
    /// Maps a percentage to a letter. Lower bounds are inclusive.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            LetterGrade::A
        } else if percentage >= 80.0 {
            LetterGrade::B
        } else if percentage >= 70.0 {
            LetterGrade::C
        } else if percentage >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// Outcome of one criterion in one grading run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    /// Name of the criterion.
    pub criterion_name:  String,
    /// Points the criterion is worth.
    pub points_possible: u32,
    /// Whether the submission satisfied it.
    pub passed:          bool,
    /// Hint attached to the criterion, used when it failed.
    pub suggestion:      String,
}

impl CriterionResult {
    /// Points actually earned: all or nothing.
    pub fn points_earned(&self) -> u32 {
        if self.passed { self.points_possible } else { 0 }
    }
}

/// Aggregate of one grading run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// Results in catalog order.
    pub results:      Vec<CriterionResult>,
    /// Points earned across passed criteria.
    pub total_score:  u32,
    /// Points available across all criteria.
    pub max_score:    u32,
    /// `total_score / max_score * 100`.
    pub percentage:   f64,
    /// Letter derived from `percentage`.
    pub letter_grade: LetterGrade,
}

impl GradeReport {
    /// Results that did not pass, in catalog order.
    pub fn failed(&self) -> impl Iterator<Item = &CriterionResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// True when every criterion passed.
    pub fn is_perfect(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Remediation hints for this report.
    pub fn suggestions(&self) -> Vec<String> {
        super::feedback::suggestions(&self.results)
    }
}
