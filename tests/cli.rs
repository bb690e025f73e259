//! Integration tests for the `spacegrade` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use spacegrade::constants::REFERENCE_DOCUMENT;

#[path = "fixture_support.rs"]
mod fixture_support;

fn run(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("spacegrade");
    cmd.env("CLICOLOR", "0").env("NO_COLOR", "1").args(args);
    cmd.assert()
}

#[test]
fn check_prints_json_for_a_local_file() {
    let path = fixture_support::fixture_path("partial.html");
    let assert = run(&["check", "--json", &path.display().to_string()]).success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("json on stdout");
    assert_eq!(json["student"], "Instructor");
    assert_eq!(json["report"]["total_score"], 75);
    assert_eq!(json["report"]["letter_grade"], "D");
}

#[test]
fn check_renders_the_terminal_report() {
    let path = fixture_support::fixture_path("partial.html");
    let assert = run(&["check", "--name", "Ada", "--no-compare", &path.display().to_string()])
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.contains("Successfully graded Ada's assignment!"));
    assert!(stdout.contains("Grade: D"));
    assert!(!stdout.contains("Code Comparison"));
}

#[test]
fn missing_file_fails_with_url_tips() {
    let assert = run(&["check", "/no/such/index.html"]).failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(stderr.contains("Error fetching file:"));
    assert!(stderr.contains("Tips for correct URL format"));
}

#[test]
fn blank_name_is_rejected() {
    let assert = run(&[
        "grade",
        "--name",
        " ",
        "--url",
        "https://github.com/user/repo/blob/main/index.html",
    ])
    .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(stderr.contains("Please enter your name"));
}

#[test]
fn reference_prints_the_model_answer() {
    let assert = run(&["reference"]).success();
    assert_eq!(String::from_utf8_lossy(&assert.get_output().stdout), REFERENCE_DOCUMENT);
}

#[test]
fn rubric_lists_criteria() {
    let assert = run(&["rubric"]).success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.contains("DOCTYPE declaration"));
    assert!(stdout.contains("Bootstrap JS CDN"));
    assert!(stdout.contains("Maximum score: 110"));
}
