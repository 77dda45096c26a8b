/**
 * API Route Handlers
 *
 * This module wires the account and message handlers into the router.
 *
 * # Routes
 *
 * ## Accounts
 * - `POST /register` - User registration
 * - `POST /login` - Credential check
 *
 * ## Messages
 * - `POST /messages` - Send a message
 * - `GET /messages` - List messages, optionally filtered
 */

use axum::routing::post;
use axum::Router;

use crate::backend::auth::{login, register};
use crate::backend::chat::handlers::{list_messages, send_message};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Account endpoints
        .route("/register", post(register))
        .route("/login", post(login))
        // Message endpoints
        .route("/messages", post(send_message).get(list_messages))
}
