//! hotel-server: entitlement-gated hotel and room queries
//!
//! - Verifies user JWTs on every hotel and ticket route
//! - Checks enrollment, ticket type and payment before answering
//! - Serves the ticket catalogue and the caller's own ticket
//! - Reads from PostgreSQL (or an in-process store)

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
