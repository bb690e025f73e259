#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Terminal and JSON rendering of grading results.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::{
    constants::{REFERENCE_DOCUMENT, URL_FORMAT_TIPS},
    fetch::FetchError,
    grade::{CriterionResult, GradeReport, Rubric},
    submission::Submission,
};

/// Everything one grading request produced.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Who submitted and from where.
    #[serde(flatten)]
    pub submission:  Submission,
    /// Scores per criterion and overall.
    pub report:      GradeReport,
    /// Remediation hints, empty for a perfect score.
    pub suggestions: Vec<String>,
}

impl Evaluation {
    /// Bundles a graded submission with its hints.
    pub fn new(submission: Submission, report: GradeReport) -> Self {
        let suggestions = report.suggestions();
        Self {
            submission,
            report,
            suggestions,
        }
    }

    /// Pretty JSON for machine consumers.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Could not serialize grading results")
    }
}

/// One table row per criterion.
#[derive(Tabled)]
struct CriterionRow {
    #[tabled(rename = "")]
    /// Pass/fail marker.
    status:    &'static str,
    #[tabled(rename = "Criterion")]
    /// Criterion name and worth.
    criterion: String,
    #[tabled(rename = "Result")]
    /// Outcome in words.
    outcome:   String,
}

impl From<&CriterionResult> for CriterionRow {
    fn from(result: &CriterionResult) -> Self {
        let (status, outcome) = if result.passed {
            ("✅", format!("Correct! You earned {} points", result.points_possible))
        } else {
            ("❌", format!("Missing or incorrect. 0/{} points", result.points_possible))
        };
        Self {
            status,
            criterion: format!("{} ({} points)", result.criterion_name, result.points_possible),
            outcome,
        }
    }
}

/// Row of the rubric listing.
#[derive(Tabled)]
struct RubricRow {
    #[tabled(rename = "#")]
    /// Position in the catalog.
    index:   usize,
    #[tabled(rename = "Criterion")]
    /// Display label.
    name:    String,
    #[tabled(rename = "Kind")]
    /// Matching kind.
    kind:    String,
    #[tabled(rename = "Pattern")]
    /// Pattern as written.
    pattern: String,
    #[tabled(rename = "Points")]
    /// Points available.
    points:  u32,
}

/// Renders the full terminal report. `compare` adds the code comparison
/// against the reference document.
pub fn render(evaluation: &Evaluation, compare: bool) -> String {
    let Evaluation {
        submission,
        report,
        suggestions,
    } = evaluation;
    let mut out = format!(
        "{}\nSource: {}\n\n{}\n\n{}\n\n",
        format!("✅ Successfully graded {}'s assignment!", submission.student).green(),
        submission.raw_url,
        summary_line(report),
        results_table(report),
    );

    if suggestions.is_empty() {
        out.push_str(&format!("{}\n", "🎉 Perfect! Your code matches all criteria!".green()));
    } else {
        out.push_str(&format!("{}\n", "💡 Suggestions for Improvement".bold()));
        for suggestion in suggestions {
            out.push_str(&format!("• {suggestion}\n"));
        }
    }

    if compare {
        out.push_str(&format!("\n{}\n", "📝 Code Comparison (- reference, + yours)".bold()));
        out.push_str(&code_comparison(&submission.content, REFERENCE_DOCUMENT));
    }

    out
}

/// `Total Score: 90/110 | Percentage: 81.8% | Grade: B`
pub fn summary_line(report: &GradeReport) -> String {
    format!(
        "Total Score: {}/{} | Percentage: {:.1}% | Grade: {}",
        report.total_score, report.max_score, report.percentage, report.letter_grade
    )
}

/// Per-criterion table with a total footer.
fn results_table(report: &GradeReport) -> String {
    let rows: Vec<CriterionRow> = report.results.iter().map(CriterionRow::from).collect();

    Table::new(&rows)
        .with(Panel::header("📊 Detailed Grading Results"))
        .with(Panel::footer(format!("Total: {}/{}", report.total_score, report.max_score)))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Lists the criteria of `rubric` with their patterns and worth.
pub fn render_rubric(rubric: &Rubric) -> String {
    let rows: Vec<RubricRow> = rubric
        .criteria()
        .iter()
        .enumerate()
        .map(|(i, c)| RubricRow {
            index:   i + 1,
            name:    c.name().to_string(),
            kind:    c.kind().to_string(),
            pattern: c.pattern().to_string(),
            points:  c.points(),
        })
        .collect();

    Table::new(&rows)
        .with(Panel::footer(format!("Maximum score: {}", rubric.max_score())))
        .with(Style::modern())
        .to_string()
}

/// The fetch error followed by hints on the expected URL shape.
pub fn render_fetch_error(err: &FetchError) -> String {
    let mut out = format!("{}\n\n💡 Tips for correct URL format:\n", err.to_string().red());
    for tip in URL_FORMAT_TIPS {
        out.push_str(&format!("- {tip}\n"));
    }
    out
}

/// Line diff from `reference` to `submitted`.
pub fn code_comparison(submitted: &str, reference: &str) -> String {
    if submitted == reference {
        return "Your code matches the reference exactly.\n".to_string();
    }

    let diff = TextDiff::from_lines(reference, submitted);
    let mut output = String::new();
    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches('\n');
        let marked = match change.tag() {
            ChangeTag::Delete => format!("- {line}").red().to_string(),
            ChangeTag::Insert => format!("+ {line}").green().to_string(),
            ChangeTag::Equal => format!("  {line}"),
        };
        output.push_str(&marked);
        output.push('\n');
    }
    output
}
