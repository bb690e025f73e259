//! # spacegrade
//!
//! An autograder for the Bootstrap spacing HTML exercise. Fetches a
//! student's `index.html` from GitHub, checks it against a fixed rubric of
//! pattern-based criteria, and produces a score, a letter grade and
//! suggestions for improvement.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Runtime configuration read from the environment
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Retrieving submissions
pub mod fetch;
/// For all things related to grading
pub mod grade;
/// Rendering results for people and machines
pub mod report;
/// Validated grading requests and fetched submissions
pub mod submission;

use anyhow::{Context, Result};
use fetch::SourceFetcher;
use grade::Rubric;
use report::Evaluation;
use submission::SubmissionRequest;

/// Runs one request end to end: validate, fetch, grade, suggest.
///
/// Input and fetch errors are returned as is (downcastable from the
/// `anyhow::Error`) so the caller can render them.
pub fn evaluate<F>(rubric: &Rubric, fetcher: &F, student: &str, source: &str) -> Result<Evaluation>
where
    F: SourceFetcher + ?Sized,
{
    let request = SubmissionRequest::new(student, source)?;
    tracing::info!("Grading {}'s submission from {}", request.student(), request.source_url());

    let submission = request.fetch(fetcher)?;
    let report = rubric.grade(&submission.content);

    Ok(Evaluation::new(submission, report))
}

/// Builds the built-in rubric, which is a fixed part of the binary.
pub fn default_rubric() -> Result<Rubric> {
    Rubric::bootstrap_spacing().context("Built-in rubric failed to compile")
}
