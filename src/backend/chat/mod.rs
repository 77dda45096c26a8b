//! Chat Backend Module
//!
//! This module contains the server-side message exchange:
//! - The append-only message log and its in-memory implementation
//! - Handlers for sending and listing messages
//!
//! # Architecture
//!
//! - **`log`** - `MessageLog` contract and `InMemoryMessageLog`
//! - **`handlers`** - POST/GET /messages
//!
//! # Example
//!
//! ```rust,no_run
//! use echosignal::backend::chat::log::{InMemoryMessageLog, MessageLog};
//!
//! # async fn example() {
//! let log = InMemoryMessageLog::new();
//! let id = log.append("alice", "bob", "hi").await.unwrap();
//! let messages = log.list(None).await;
//! # }
//! ```

/// Message log
pub mod log;

/// HTTP handlers for messages
pub mod handlers;

pub use log::{InMemoryMessageLog, MessageLog};
