/**
 * Send Message Handler
 *
 * This module implements POST /messages, which appends one message to the
 * log.
 *
 * # Validation
 *
 * - sender, receiver, and content must be non-empty (400 "Missing data")
 * - with `require_registered_participants` enabled, sender and receiver must
 *   both have accounts (400 "Unknown participant")
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::chat::handlers::types::{SendMessageRequest, SendMessageResponse};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Send message handler
///
/// # Example Request
///
/// ```http
/// POST /messages HTTP/1.1
/// Content-Type: application/json
///
/// { "sender": "alice", "receiver": "bob", "content": "hi" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "Sent!", "id": 1 }
/// ```
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, BackendError> {
    let Json(request) = payload?;

    if state.config.require_registered_participants {
        for participant in [&request.sender, &request.receiver] {
            if !participant.is_empty() && !state.accounts.contains(participant).await {
                tracing::warn!("Message rejected, unknown participant: {:?}", participant);
                return Err(BackendError::handler(
                    StatusCode::BAD_REQUEST,
                    "Unknown participant",
                ));
            }
        }
    }

    let id = state
        .messages
        .append(&request.sender, &request.receiver, &request.content)
        .await
        .map_err(|e| {
            tracing::warn!("Message rejected: {}", e);
            e
        })?;

    tracing::info!("Message {} sent from {} to {}", id, request.sender, request.receiver);

    Ok(Json(SendMessageResponse {
        message: "Sent!".to_string(),
        id,
    }))
}
