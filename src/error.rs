//! Unified error types.

use std::time::Duration;
use thiserror::Error;

/// Top-level error returned by every client operation.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Upstream request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(HttpError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl MarketError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, MarketError::Timeout(_))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl From<HttpError> for MarketError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(after) => MarketError::Timeout(after),
            other => MarketError::UpstreamUnavailable(other),
        }
    }
}
