//! Shared types for the hotel service
//!
//! Domain models and the error types used by hotel-server.

pub mod error;
pub mod models;
