//! Error types for the Zoom API client.
//!
//! # Design
//! Only two things go wrong at runtime: the service answers with a status
//! outside `[200, 300)` (`Response`), or no status is obtained at all
//! (`Transport`). `Response` keeps the decoded body so callers can read the
//! service's own error payload. `Transport` wraps the transport's error
//! untranslated; with `UreqTransport` it downcasts to `ureq::Error`.
//!
//! A body that is not JSON is not an error; it decodes to `Value::Null`.

use serde_json::Value;
use thiserror::Error;

/// Errors returned by `ZoomClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service returned a non-2xx status.
    #[error("Status: {status}")]
    Response { status: u16, body: Value },

    /// The request never produced a status code.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The call arguments could not be serialized to a JSON body.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Stable machine-readable kind.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Response { .. } => "response-error",
            ApiError::Transport(_) => "transport-error",
            ApiError::Serialization(_) => "serialization-error",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded response body attached to a `Response` error.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiError::Response { body, .. } => Some(body),
            _ => None,
        }
    }
}
