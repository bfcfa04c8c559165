//! Data models
//!
//! Shared between hotel-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i32` (PostgreSQL SERIAL).

pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod ticket;

// Re-exports
pub use enrollment::*;
pub use hotel::*;
pub use payment::*;
pub use ticket::*;
