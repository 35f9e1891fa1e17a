//! Error types for the client layer.

use thiserror::Error;

/// Transport-level failure: connect, DNS, timeout, or body read.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Failure loading the regulation feed.
///
/// A feed body with an unrecognized JSON shape is not an error; it
/// degrades to an empty list at the decode step.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No base URL configured; no request was attempted.
    #[error("no API base URL configured")]
    ConfigurationMissing,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// Failure starting a scrape job.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no API base URL configured")]
    ConfigurationMissing,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
