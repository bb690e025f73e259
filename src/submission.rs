#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use crate::fetch::{FetchError, SourceFetcher};

/// Rejections raised before anything is fetched.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    /// The student name is blank.
    #[error("Please enter your name")]
    MissingName,
    /// The source URL is blank.
    #[error("Please enter your GitHub URL")]
    MissingUrl,
}

/// A student's declared name and where their work lives, checked for
/// non-emptiness only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Declared student name.
    student:    String,
    /// URL or path as given.
    source_url: String,
}

impl SubmissionRequest {
    /// Trims both fields and rejects blanks, name first.
    pub fn new(student: &str, source_url: &str) -> Result<Self, SubmissionError> {
        let student = student.trim();
        let source_url = source_url.trim();

        if student.is_empty() {
            return Err(SubmissionError::MissingName);
        }
        if source_url.is_empty() {
            return Err(SubmissionError::MissingUrl);
        }

        Ok(Self {
            student:    student.to_string(),
            source_url: source_url.to_string(),
        })
    }

    /// Declared student name.
    pub fn student(&self) -> &str {
        &self.student
    }

    /// URL or path as given.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Retrieves the submitted file with `fetcher`.
    pub fn fetch<F: SourceFetcher + ?Sized>(self, fetcher: &F) -> Result<Submission, FetchError> {
        let fetched = fetcher.fetch(&self.source_url)?;
        Ok(Submission {
            student:    self.student,
            source_url: self.source_url,
            raw_url:    fetched.resolved,
            content:    fetched.content,
        })
    }
}

/// One fetched file plus where it came from and who sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Declared student name.
    pub student:    String,
    /// URL or path as given.
    pub source_url: String,
    /// Location actually read.
    pub raw_url:    String,
    /// Raw file text.
    #[serde(skip)]
    pub content:    String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected_first() {
        assert_eq!(SubmissionRequest::new("  ", ""), Err(SubmissionError::MissingName));
    }

    #[test]
    fn blank_url_is_rejected() {
        assert_eq!(SubmissionRequest::new("Ada", "\t"), Err(SubmissionError::MissingUrl));
    }

    #[test]
    fn fields_are_trimmed() {
        let req = SubmissionRequest::new(" Ada ", " https://github.com/a/b ").expect("valid");
        assert_eq!(req.student(), "Ada");
        assert_eq!(req.source_url(), "https://github.com/a/b");
    }
}
