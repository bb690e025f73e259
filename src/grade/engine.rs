#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{
    catalog::Rubric,
    results::{CriterionResult, GradeReport, LetterGrade},
};

/// Grades `text` against every criterion of `rubric`, in catalog order.
///
/// Never fails: any text, including the empty string, produces a report.
pub fn grade(rubric: &Rubric, text: &str) -> GradeReport {
    let mut total_score = 0;
    let mut results = Vec::with_capacity(rubric.criteria().len());

    for criterion in rubric.criteria() {
        let passed = criterion.matches(text);
        if passed {
            total_score += criterion.points();
        }
        tracing::debug!(
            criterion = criterion.name(),
            kind = %criterion.kind(),
            passed,
            "checked criterion"
        );

        results.push(CriterionResult {
            criterion_name: criterion.name().to_string(),
            points_possible: criterion.points(),
            passed,
            suggestion: criterion.suggestion().to_string(),
        });
    }

    let max_score = rubric.max_score();
    let percentage = percentage(total_score, max_score);
    let letter_grade = LetterGrade::from_percentage(percentage);

    tracing::info!("Scored {total_score}/{max_score} ({percentage:.1}%), grade {letter_grade}");

    GradeReport {
        results,
        total_score,
        max_score,
        percentage,
        letter_grade,
    }
}

/// `score / out_of * 100`, or zero for an empty rubric.
fn percentage(score: u32, out_of: u32) -> f64 {
    if out_of == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(out_of) * 100.0
}
