//! Error codes, the handler error type and its JSON body
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::HotelNotFound).with_detail("hotel_id", 3);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//! assert_eq!(ErrorBody::from(&err).code, 4001);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, ErrorBody};
