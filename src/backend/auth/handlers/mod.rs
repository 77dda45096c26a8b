//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - Credential check, no token issued
//!
//! # Example
//!
//! ```rust,no_run
//! use echosignal::backend::auth::handlers::{register, login};
//! use echosignal::backend::server::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login));
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{CredentialsRequest, LoginResponse, StatusResponse};

// Re-export handlers
pub use register::register;
pub use login::login;
