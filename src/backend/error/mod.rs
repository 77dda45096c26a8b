//! Backend Error Module
//!
//! This module defines the errors returned by HTTP handlers. They convert to
//! JSON responses, so handlers return `Result<_, BackendError>` and use `?`.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation and 404 fallback
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Errors raised by handlers with an explicit status
//! - `Store` - Errors from the account store and message log
//! - `MalformedBody` - JSON bodies that fail to decode
//! - `MalformedQuery` - query strings that fail to decode

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
pub use conversion::not_found;
