/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Security
 *
 * - Passwords are verified with bcrypt
 * - Unknown email and wrong password both return the same 401 body
 * - Passwords are never logged or returned in responses
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::accounts::AccountStore;
use crate::backend::auth::handlers::types::{CredentialsRequest, LoginResponse};
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password (empty fields included)
/// * `400 Bad Request` - malformed body
///
/// # Example Response
///
/// ```json
/// { "message": "Login successful!", "email": "alice@x.com" }
/// ```
pub async fn login(
    State(accounts): State<Arc<dyn AccountStore>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;

    let email = accounts
        .authenticate(&request.email, &request.password)
        .await
        .map_err(|e| {
            tracing::warn!("Login failed for {:?}: {}", request.email, e);
            e
        })?;

    tracing::info!("User logged in: {}", email);

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        email,
    }))
}
