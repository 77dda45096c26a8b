//! Authentication Module
//!
//! This module handles account registration and credential verification.
//!
//! # Architecture
//!
//! - **`accounts`** - Account model, `AccountStore` contract, in-memory store
//! - **`credentials`** - bcrypt hashing run on the blocking pool
//! - **`handlers`** - HTTP handlers for `/register` and `/login`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account store
//! ├── credentials.rs  - Password hashing
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     ├── register.rs
//!     └── login.rs
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Invalid credentials return 401 without revealing whether the email exists
//! - No tokens or sessions are issued

/// Account model and store
pub mod accounts;

/// Password hashing and verification
pub mod credentials;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::{Account, AccountStore, InMemoryAccountStore};
pub use credentials::{CredentialHasher, PasswordHash};
pub use handlers::{login, register};
