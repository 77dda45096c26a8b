//! Backend Module
//!
//! This module contains all server-side code: the in-memory stores and the
//! Axum HTTP layer around them.
//!
//! # Architecture
//!
//! - **`auth`** - Account store, credential hashing, register/login handlers
//! - **`chat`** - Message log and `/messages` handlers
//! - **`server`** - Application state, configuration, initialization
//! - **`routes`** - Router assembly
//! - **`error`** - Backend error types and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and credentials
//! ├── chat/           - Message log
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries `Arc<dyn AccountStore>`, `Arc<dyn MessageLog>`, and the
//! configuration. Each store owns a `tokio::sync::RwLock`; mutations hold the
//! write guard for their whole check-then-write sequence and never across
//! password hashing.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; store errors convert with `?` and
//! render as `{ "error": ..., "status": ... }`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Message log and handlers
pub mod chat;

/// Backend error types
pub mod error;

/// Accounts and authentication
pub mod auth;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use auth::{AccountStore, InMemoryAccountStore};
pub use chat::{InMemoryMessageLog, MessageLog};
pub use error::BackendError;
