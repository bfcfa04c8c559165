//! Authentication middleware for user connections

pub mod user_auth;

pub use user_auth::{AuthenticatedUser, user_auth_middleware};
