//! Shared error types for the services crate.

use thiserror::Error;

/// Errors surfaced by the remote course service.
///
/// The client draws no finer distinctions than these: a missing resource, a
/// non-2xx response, or a transport/decode failure. Nothing is retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// True when the error is a missing resource rather than a failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
