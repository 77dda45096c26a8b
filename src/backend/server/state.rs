/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the two stores behind their trait objects plus the
 * validated configuration. Handlers depend on the contracts, not the
 * in-memory implementations, so a persistent store can be swapped in without
 * touching them.
 *
 * # Thread Safety
 *
 * Each store synchronizes internally; `AppState` only clones `Arc`s.
 *
 * # Example
 *
 * ```rust
 * use echosignal::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let count = state.messages.len().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::accounts::{AccountStore, InMemoryAccountStore};
use crate::backend::auth::credentials::CredentialHasher;
use crate::backend::chat::log::{InMemoryMessageLog, MessageLog};
use crate::shared::{AppConfig, StoreError};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Registered accounts
    pub accounts: Arc<dyn AccountStore>,

    /// Append-only message log
    pub messages: Arc<dyn MessageLog>,

    /// Validated runtime configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble state from explicit store implementations
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        messages: Arc<dyn MessageLog>,
        config: AppConfig,
    ) -> Self {
        Self {
            accounts,
            messages,
            config: Arc::new(config),
        }
    }

    /// Fresh in-memory stores configured from `config`
    ///
    /// Fails only if the configured bcrypt cost cannot produce a hash.
    pub async fn in_memory(config: AppConfig) -> Result<Self, StoreError> {
        let hasher = CredentialHasher::new(config.password_cost);
        let accounts = InMemoryAccountStore::new(hasher).await?;
        Ok(Self::new(
            Arc::new(accounts),
            Arc::new(InMemoryMessageLog::new()),
            config,
        ))
    }
}

/// Lets handlers extract `State<Arc<dyn AccountStore>>`
impl FromRef<AppState> for Arc<dyn AccountStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

/// Lets handlers extract `State<Arc<dyn MessageLog>>`
impl FromRef<AppState> for Arc<dyn MessageLog> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.messages.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
