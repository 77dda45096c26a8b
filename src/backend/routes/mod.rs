//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, `/` handler, CORS, fallback
//! └── api_routes.rs   - Account and message routes
//! ```
//!
//! # Routes
//!
//! | Method | Path        | Handler         |
//! |--------|-------------|-----------------|
//! | GET    | `/`         | `home`          |
//! | POST   | `/register` | `register`      |
//! | POST   | `/login`    | `login`         |
//! | POST   | `/messages` | `send_message`  |
//! | GET    | `/messages` | `list_messages` |

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
