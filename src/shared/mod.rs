//! Shared Module
//!
//! This module contains the types used by both the stores and the HTTP layer:
//! message records, store errors, and application configuration.
//!
//! # Overview
//!
//! Nothing in here knows about axum. The backend converts these types into
//! HTTP responses at its own boundary.

/// Message data structure
pub mod message;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::{Message, MessageFilter, MessageId};
pub use error::StoreError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
