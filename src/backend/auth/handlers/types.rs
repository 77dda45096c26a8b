/**
 * Authentication Handler Types
 *
 * This module defines the request and response bodies used by the register
 * and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Credentials request
///
/// Body of both `POST /register` and `POST /login`. Missing fields
/// deserialize as empty strings and are rejected by the account store.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CredentialsRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage, never logged)
    #[serde(default)]
    pub password: String,
}

/// Plain acknowledgement body: `{ "message": ... }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub message: String,
}

impl StatusResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response
///
/// Confirms the authenticated email. No token or session is issued.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub message: String,
    pub email: String,
}
