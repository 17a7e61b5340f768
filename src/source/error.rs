//! Error types for the notification source layer.

use thiserror::Error;

use super::limit::BatchLimit;

/// Error type for low-level HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request URL could not be constructed.
    ///
    /// This indicates a configuration error rather than a transient
    /// failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for notification retrieval.
///
/// The polling engine propagates these verbatim; it never retries.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A requested batch limit falls outside the accepted range.
    ///
    /// Raised before any network interaction, mirroring the remote
    /// API's documented constraint on batch size.
    #[error(
        "Invalid batch limit {value}: must be within {min}..={max}",
        min = BatchLimit::MIN,
        max = BatchLimit::MAX
    )]
    InvalidLimit {
        /// The rejected limit value.
        value: u32,
    },

    /// The HTTP transport failed.
    #[error("HTTP transport failed: {0}")]
    Http(#[from] HttpError),

    /// The remote answered with a non-success status code.
    #[error("Unexpected status {status}{}", body_excerpt(.body))]
    UnexpectedStatus {
        /// The HTTP status code received.
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8.
        body: Option<String>,
    },

    /// The response body could not be decoded into notifications.
    #[error("Failed to decode notification payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A single-notification fetch found the queue empty.
    ///
    /// The remote endpoint long-polls, so an empty page on a
    /// single-shape fetch indicates a protocol problem.
    #[error("Notification queue returned no records")]
    Empty,
}

fn body_excerpt(body: &Option<String>) -> String {
    body.as_deref().map_or_else(String::new, |b| {
        let excerpt: String = b.chars().take(120).collect();
        format!(": {excerpt}")
    })
}
