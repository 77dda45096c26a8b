/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Decode the JSON body (malformed bodies are rejected with 400)
 * 2. Hand email and password to the account store
 * 3. The store hashes the password and inserts atomically
 *
 * # Responses
 *
 * - `200` - `{ "message": "Registration successful!" }`
 * - `400` - `{ "error": "User already exists" }`
 * - `400` - `{ "error": "Missing data" }` for empty fields or a malformed body
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::accounts::AccountStore;
use crate::backend::auth::handlers::types::{CredentialsRequest, StatusResponse};
use crate::backend::error::BackendError;

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "alice@x.com", "password": "pw1" }
/// ```
pub async fn register(
    State(accounts): State<Arc<dyn AccountStore>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, BackendError> {
    let Json(request) = payload?;

    accounts
        .register(&request.email, &request.password)
        .await
        .map_err(|e| {
            tracing::warn!("Registration rejected for {:?}: {}", request.email, e);
            e
        })?;

    tracing::info!("User registered: {}", request.email);

    Ok(Json(StatusResponse::new("Registration successful!")))
}
