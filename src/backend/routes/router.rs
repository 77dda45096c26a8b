/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health route (`GET /`)
 * 2. API routes (accounts, messages)
 * 3. CORS layer (any origin)
 * 4. JSON 404 fallback
 */

use axum::{response::Json, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::backend::auth::handlers::StatusResponse;
use crate::backend::error::not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Health/landing handler (GET /)
pub async fn home() -> Json<StatusResponse> {
    Json(StatusResponse::new("EchoSignal backend is running"))
}

/// Create the Axum router with all routes configured
///
/// Cross-origin requests are allowed from any origin.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(home));

    // Add API routes
    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
