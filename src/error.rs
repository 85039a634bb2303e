//! API Error Types
//!
//! Normalizes transport failures, non-success HTTP statuses and response
//! decoding failures into a single error type consumed by the sync engine.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the remote message API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connection refused, timeout, TLS, ...)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("request failed: {status} - {body}")]
    Status {
        /// HTTP status code of the response
        status: StatusCode,
        /// Response body text, if it could be read
        body: String,
    },

    /// The response body could not be decoded into the expected shape
    #[error("failed to parse response: {message}")]
    Decode {
        /// Human-readable decode error message
        message: String,
    },
}

impl ApiError {
    /// HTTP status code, if this error carries one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
        }
    }
}
