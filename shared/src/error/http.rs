//! HTTP status for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            Self::EnrollmentNotFound
            | Self::TicketNotFound
            | Self::HotelNotFound
            | Self::HotelListEmpty => StatusCode::NOT_FOUND,

            Self::PaymentRequired => StatusCode::PAYMENT_REQUIRED,

            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
