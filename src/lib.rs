//! EchoSignal - Main Library
//!
//! EchoSignal is a small chat backend: user registration, login, and message
//! exchange over HTTP, backed by concurrency-safe in-memory stores.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by every layer
//!   - Message structures and filters
//!   - Store error types
//!   - Application configuration
//!
//! - **`backend`** - Server-side code
//!   - Account store and credential hashing
//!   - Message log
//!   - Axum HTTP handlers, routing, and error responses
//!   - Application state and server initialization
//!
//! # Usage
//!
//! ```rust,no_run
//! use echosignal::backend::server::init::create_app;
//! use echosignal::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::default()).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Each store owns a `tokio::sync::RwLock`. Mutations run their whole
//! check-then-write sequence under the write guard; reads share the read guard.
//! Stores are handed to handlers as `Arc<dyn AccountStore>` and
//! `Arc<dyn MessageLog>` through `AppState`.
//!
//! # Error Handling
//!
//! - `shared::error::StoreError` for store-level failures
//! - `backend::error::BackendError` for HTTP-facing failures, rendered as JSON

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
