//! Error types for remote API operations.
//!
//! The taxonomy is deliberately flat: the orchestrator treats every variant
//! as "the operation failed" and never branches on status codes.
use thiserror::Error;

/// Errors that can occur while talking to the game API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Http { status: u16 },

    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected payload shape.
    #[error("failed to decode response payload")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
