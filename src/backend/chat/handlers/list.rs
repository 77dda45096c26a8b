use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::chat::handlers::types::{MessageQuery, MessageResponse};
use crate::backend::chat::log::MessageLog;
use crate::backend::error::BackendError;

/// List messages handler (GET /messages)
///
/// Returns messages oldest first. Optional `sender` / `receiver` query
/// parameters narrow the result; both together select a conversation.
///
/// # Errors
///
/// * `400 Bad Request` - query string that does not parse, e.g. a repeated key
pub async fn list_messages(
    State(messages): State<Arc<dyn MessageLog>>,
    query: Result<Query<MessageQuery>, QueryRejection>,
) -> Result<Json<Vec<MessageResponse>>, BackendError> {
    let Query(query) = query?;
    let filter = query.into_filter();
    let listed = messages.list(filter.as_ref()).await;

    tracing::debug!("Listing {} messages (filter: {:?})", listed.len(), filter);

    Ok(Json(listed.into_iter().map(MessageResponse::from).collect()))
}
