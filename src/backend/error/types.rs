/**
 * Backend Error Types
 *
 * This module defines the errors returned by HTTP handlers and their mapping
 * to status codes and client-facing messages.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Raised by handlers themselves with an explicit status, e.g. an unknown
 * message participant or an unmatched route.
 *
 * ## Store Errors
 *
 * Wrapped `StoreError`s from the account store and message log:
 * - `AlreadyExists` - 400 "User already exists"
 * - `NotFound` / `InvalidCredentials` - 401 "Invalid credentials" (one message
 *   for both so login does not reveal which emails are registered)
 * - `InvalidInput` - 400 "Missing data"
 * - `Credential` - 500, no detail exposed
 *
 * ## Malformed Bodies
 *
 * JSON bodies that fail to parse are rejected as 400 "Missing data".
 * Query strings that fail to parse are rejected as 400 "Invalid query".
 */

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::StoreError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use echosignal::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Unknown participant");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Error from the account store or message log
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request body was not valid JSON of the expected shape
    #[error("Malformed request body: {reason}")]
    MalformedBody {
        /// Extractor rejection text, logged but not returned to the client
        reason: String,
    },

    /// Query string did not match the expected parameters
    #[error("Malformed query string: {reason}")]
    MalformedQuery {
        /// Extractor rejection text, logged but not returned to the client
        reason: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Store(err) => match err {
                StoreError::AlreadyExists => StatusCode::BAD_REQUEST,
                StoreError::NotFound | StoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                StoreError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                StoreError::Credential { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::MalformedBody { .. } | Self::MalformedQuery { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Store(err) => match err {
                StoreError::AlreadyExists => "User already exists".to_string(),
                StoreError::NotFound | StoreError::InvalidCredentials => {
                    "Invalid credentials".to_string()
                }
                StoreError::InvalidInput { .. } => "Missing data".to_string(),
                StoreError::Credential { .. } => "Internal server error".to_string(),
            },
            Self::MalformedBody { .. } => "Missing data".to_string(),
            Self::MalformedQuery { .. } => "Invalid query".to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::MalformedBody {
            reason: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        Self::MalformedQuery {
            reason: rejection.body_text(),
        }
    }
}
