use pretty_assertions::assert_eq;
use spacegrade::{
    constants::REFERENCE_DOCUMENT,
    default_rubric, evaluate,
    fetch::{FetchError, FetchedSource, FileFetcher, SourceFetcher, raw_content_url},
    report,
    submission::SubmissionError,
};

mod fixture_support;

/// Answers every request with the same body, recording nothing.
struct CannedFetcher(&'static str);

impl SourceFetcher for CannedFetcher {
    fn fetch(&self, location: &str) -> Result<FetchedSource, FetchError> {
        Ok(FetchedSource {
            resolved: raw_content_url(location),
            content:  self.0.to_string(),
        })
    }
}

/// Fails every request.
struct OfflineFetcher;

impl SourceFetcher for OfflineFetcher {
    fn fetch(&self, location: &str) -> Result<FetchedSource, FetchError> {
        Err(FetchError::Timeout {
            url: raw_content_url(location),
        })
    }
}

#[test]
fn github_blob_url_is_resolved_before_fetching() {
    let rubric = default_rubric().expect("rubric");
    let evaluation = evaluate(
        &rubric,
        &CannedFetcher(REFERENCE_DOCUMENT),
        "Ada",
        "https://github.com/user/repo/blob/main/index.html",
    )
    .expect("evaluation");

    assert_eq!(
        evaluation.submission.raw_url,
        "https://raw.githubusercontent.com/user/repo/main/index.html"
    );
    assert_eq!(evaluation.submission.student, "Ada");
    assert!(evaluation.suggestions.is_empty());
}

#[test]
fn blank_inputs_stop_before_fetching() {
    let rubric = default_rubric().expect("rubric");

    let err = evaluate(&rubric, &OfflineFetcher, "", "https://github.com/u/r").expect_err("no name");
    assert_eq!(err.downcast_ref::<SubmissionError>(), Some(&SubmissionError::MissingName));

    let err = evaluate(&rubric, &OfflineFetcher, "Ada", "   ").expect_err("no url");
    assert_eq!(err.downcast_ref::<SubmissionError>(), Some(&SubmissionError::MissingUrl));
}

#[test]
fn fetch_failures_end_the_request() {
    let rubric = default_rubric().expect("rubric");
    let err = evaluate(&rubric, &OfflineFetcher, "Ada", "https://github.com/u/r").expect_err("offline");

    let fetch_err = err.downcast_ref::<FetchError>().expect("fetch error");
    assert!(fetch_err.is_timeout());
}

#[test]
fn local_files_are_graded_like_remote_ones() {
    let rubric = default_rubric().expect("rubric");
    let path = fixture_support::fixture_path("partial.html");
    let evaluation = evaluate(&rubric, &FileFetcher, "Instructor", &path.display().to_string())
        .expect("evaluation");

    assert_eq!(evaluation.report.total_score, 75);
    assert_eq!(evaluation.suggestions.len(), 4);
}

#[test]
fn terminal_report_shows_scores_hints_and_diff() {
    fixture_support::plain_output();
    let rubric = default_rubric().expect("rubric");
    let path = fixture_support::fixture_path("partial.html");
    let evaluation = evaluate(&rubric, &FileFetcher, "Ada", &path.display().to_string())
        .expect("evaluation");

    let text = report::render(&evaluation, true);
    assert!(text.contains("Successfully graded Ada's assignment!"));
    assert!(text.contains("Total Score: 75/110 | Percentage: 68.2% | Grade: D"));
    assert!(text.contains("Detailed Grading Results"));
    assert!(text.contains("Total: 75/110"));
    assert!(text.contains("Suggestions for Improvement"));
    assert!(text.contains("• Include Bootstrap 5.3.2 JS bundle from CDN"));
    assert!(text.contains("Code Comparison"));
    assert!(text.contains(r#"+     <div class="M-3 bg-light border p-2">m-3</div>"#));
}

#[test]
fn perfect_report_congratulates() {
    fixture_support::plain_output();
    let rubric = default_rubric().expect("rubric");
    let evaluation = evaluate(&rubric, &CannedFetcher(REFERENCE_DOCUMENT), "Ada", "https://github.com/u/r")
        .expect("evaluation");

    let text = report::render(&evaluation, false);
    assert!(text.contains("Perfect! Your code matches all criteria!"));
    assert!(!text.contains("Suggestions for Improvement"));
    assert!(!text.contains("Code Comparison"));
}

#[test]
fn json_report_carries_the_whole_result() {
    let rubric = default_rubric().expect("rubric");
    let evaluation = evaluate(&rubric, &CannedFetcher(""), "Ada", "https://github.com/u/r")
        .expect("evaluation");

    let json: serde_json::Value =
        serde_json::from_str(&evaluation.to_json().expect("json")).expect("valid json");

    assert_eq!(json["student"], "Ada");
    assert_eq!(json["raw_url"], "https://raw.githubusercontent.com/u/r/index.html");
    assert_eq!(json["report"]["total_score"], 0);
    assert_eq!(json["report"]["max_score"], 110);
    assert_eq!(json["report"]["letter_grade"], "F");
    assert_eq!(json["report"]["results"].as_array().map(Vec::len), Some(14));
    assert_eq!(json["suggestions"].as_array().map(Vec::len), Some(14));
    assert!(json.get("content").is_none());
}

#[test]
fn rubric_listing_names_every_criterion() {
    fixture_support::plain_output();
    let rubric = default_rubric().expect("rubric");
    let text = report::render_rubric(&rubric);
    for criterion in rubric.criteria() {
        assert!(text.contains(criterion.name()));
    }
    assert!(text.contains("Maximum score: 110"));
}
