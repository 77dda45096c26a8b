//! Store Error Types
//!
//! This module defines the errors returned by the account store and the
//! message log. They describe precondition violations, never transient faults,
//! so callers treat every variant as terminal for the request.
//!
//! # Error Categories
//!
//! - `AlreadyExists` - Registration for an email that is already taken
//! - `NotFound` - Authentication for an email with no account
//! - `InvalidCredentials` - Authentication with the wrong password
//! - `InvalidInput` - A required field is missing or empty
//! - `Credential` - The password hashing backend failed
//!
//! # Usage
//!
//! ```rust
//! use echosignal::shared::error::StoreError;
//!
//! let error = StoreError::invalid_input("content", "must not be empty");
//! ```
use thiserror::Error;

/// Errors produced by the in-process stores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An account with this email is already registered
    #[error("account already exists")]
    AlreadyExists,

    /// No account is registered under this email
    #[error("account not found")]
    NotFound,

    /// The password does not match the stored credential
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A required field is missing or empty
    #[error("invalid input in field '{field}': {message}")]
    InvalidInput {
        /// The offending field
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Hashing or verifying a credential failed
    #[error("credential error: {message}")]
    Credential {
        /// Human-readable error message
        message: String,
    },
}

impl StoreError {
    /// Create a new invalid input error
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new credential error
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// Reject `value` as `InvalidInput` if it is empty
    pub fn require_non_empty(field: &str, value: &str) -> Result<(), Self> {
        if value.is_empty() {
            return Err(Self::invalid_input(field, "must not be empty"));
        }
        Ok(())
    }
}

impl From<bcrypt::BcryptError> for StoreError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::credential(err.to_string())
    }
}
