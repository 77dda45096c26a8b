/**
 * Server Initialization
 *
 * This module builds the Axum application: fresh in-memory stores, the
 * shared `AppState`, and the router.
 *
 * # Initialization Process
 *
 * 1. Create the account store with a bcrypt hasher at the configured cost
 * 2. Create an empty message log
 * 3. Wrap both with the configuration in `AppState`
 * 4. Create and configure the router
 *
 * Nothing is restored on startup; all state lives for the life of the process.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::{AppConfig, StoreError};

/// Create the Axum application backed by in-memory stores
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!(
        "Initializing EchoSignal backend (bcrypt cost {}, registered participants required: {})",
        config.password_cost,
        config.require_registered_participants
    );

    let app_state = AppState::in_memory(config).await?;
    Ok(create_app_with_state(app_state))
}

/// Create the Axum application around existing state
///
/// Tests use this to inspect the stores behind the router.
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
