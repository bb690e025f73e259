#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Resolving submission URLs to raw file contents.

use std::path::PathBuf;

use reqwest::{Url, blocking::Client};

use crate::{
    config::ConfigHandle,
    constants::{BLOB_SEGMENT, RAW_CONTENT_HOST, TARGET_FILE, WEB_UI_HOST},
};

/// Errors raised while retrieving a submission. Each one ends the grading
/// attempt; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The resolved URL could not be parsed.
    #[error("Error fetching file: `{url}` is not a valid URL ({reason})")]
    InvalidUrl {
        /// The URL after resolution.
        url:    String,
        /// Parser message.
        reason: String,
    },
    /// The hosting provider did not answer in time.
    #[error("Error fetching file: timed out waiting for {url}")]
    Timeout {
        /// The URL that was requested.
        url: String,
    },
    /// The hosting provider answered with a non-success status.
    #[error("Error fetching file: {status} for url ({url})")]
    Status {
        /// The URL that was requested.
        url:    String,
        /// HTTP status code returned.
        status: u16,
    },
    /// Connection, TLS or body decoding failure.
    #[error("Error fetching file: {source}")]
    Network {
        /// The URL that was requested.
        url:    String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// A local submission could not be read.
    #[error("Error fetching file: could not read {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// True for the bounded-wait case, so callers can tell it apart from
    /// other network failures.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}

/// Contents of a submission together with where they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedSource {
    /// Location actually read (raw URL or file path).
    pub resolved: String,
    /// Raw file text.
    pub content:  String,
}

/// Anything that can turn a submission location into its text.
pub trait SourceFetcher {
    /// Retrieves the file named by `location`.
    fn fetch(&self, location: &str) -> Result<FetchedSource, FetchError>;
}

/// Rewrites a GitHub web-UI URL into the raw-content URL for the submitted
/// `index.html`. URLs on other hosts are returned unchanged.
///
/// * `url`: the URL as typed by the student
pub fn raw_content_url(url: &str) -> String {
    let url = url.trim();
    if !url.contains(WEB_UI_HOST) {
        return url.to_string();
    }

    let mut raw = url
        .replace(WEB_UI_HOST, RAW_CONTENT_HOST)
        .replace(BLOB_SEGMENT, "/");

    if !raw.ends_with(TARGET_FILE) {
        if !raw.ends_with('/') {
            raw.push('/');
        }
        raw.push_str(TARGET_FILE);
    }

    raw
}

/// Fetches submissions over HTTP from the hosting provider.
#[derive(Clone)]
pub struct HttpFetcher {
    /// Client carrying the configured timeout and user agent.
    client: Client,
}

impl HttpFetcher {
    /// Uses `client` as is.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Uses the shared client from `config`.
    pub fn from_config(config: &ConfigHandle) -> Self {
        Self::new(config.http_client())
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<FetchedSource, FetchError> {
        let resolved = raw_content_url(location);
        let url = Url::parse(&resolved).map_err(|e| FetchError::InvalidUrl {
            url:    resolved.clone(),
            reason: e.to_string(),
        })?;

        tracing::info!("Fetching {resolved}");
        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: resolved.clone(),
                }
            } else {
                FetchError::Network {
                    url:    resolved.clone(),
                    source: e,
                }
            }
        };

        let response = self.client.get(url).send().map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{resolved} answered {status}");
            return Err(FetchError::Status {
                url:    resolved,
                status: status.as_u16(),
            });
        }

        let content = response.text().map_err(classify)?;
        tracing::debug!(bytes = content.len(), "fetched submission");

        Ok(FetchedSource { resolved, content })
    }
}

/// Reads submissions from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl SourceFetcher for FileFetcher {
    fn fetch(&self, location: &str) -> Result<FetchedSource, FetchError> {
        let path = PathBuf::from(location);
        let content = std::fs::read_to_string(&path).map_err(|source| FetchError::Read {
            path: path.clone(),
            source,
        })?;

        Ok(FetchedSource {
            resolved: path.display().to_string(),
            content,
        })
    }
}
