#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The model answer for the Bootstrap spacing exercise. Grading it with the
/// built-in rubric awards full marks.
pub const REFERENCE_DOCUMENT: &str = include_str!("reference/index.html");

/// Host of the GitHub web UI.
pub const WEB_UI_HOST: &str = "github.com";

/// Host serving unrendered file contents from GitHub.
pub const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";

/// Path segment GitHub's web UI puts in front of the ref when showing a file.
pub const BLOB_SEGMENT: &str = "/blob/";

/// The file every submission is expected to contain.
pub const TARGET_FILE: &str = "index.html";

/// Default number of seconds to wait for the hosting provider.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the fetch timeout.
pub const FETCH_TIMEOUT_ENV: &str = "SPACEGRADE_FETCH_TIMEOUT_SECS";

/// Environment variable overriding the HTTP user agent.
pub const USER_AGENT_ENV: &str = "SPACEGRADE_USER_AGENT";

/// Tips shown to students whose submission could not be fetched.
pub const URL_FORMAT_TIPS: [&str; 3] = [
    "Make sure the URL points to your `index.html` file",
    "Example: `https://github.com/username/repository/blob/main/index.html`",
    "Or: `https://raw.githubusercontent.com/username/repository/main/index.html`",
];
