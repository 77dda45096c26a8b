//! Chat Handlers Module
//!
//! This module contains the Axum handlers for the `/messages` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs   - Module exports and documentation
//! ├── types.rs - Request, query, and response bodies
//! ├── send.rs  - POST /messages
//! └── list.rs  - GET /messages
//! ```
//!
//! # Route Handlers
//!
//! ## POST /messages
//!
//! Appends a message and returns its id.
//!
//! ## GET /messages
//!
//! Returns messages in acceptance order, optionally filtered by `sender`,
//! `receiver`, or both (conversation).

/// Request and response types
pub mod types;

/// Send message handler
pub mod send;

/// List messages handler
pub mod list;

pub use send::send_message;
pub use list::list_messages;
