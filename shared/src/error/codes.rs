//! Numeric error codes carried in every error body
//!
//! - 1xxx: authentication
//! - 2xxx: enrollment and ticket lookups
//! - 3xxx: hotel entitlement
//! - 4xxx: hotel lookups
//! - 9xxx: system

/// Error code sent to clients as the `code` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Auth ====================
    /// No bearer credential on the request
    NotAuthenticated = 1001,
    /// Token signature was valid but `exp` has passed
    TokenExpired = 1003,
    /// Token is malformed, badly signed, or names no user
    TokenInvalid = 1004,

    // ==================== 2xxx: Enrollment ====================
    EnrollmentNotFound = 2001,
    TicketNotFound = 2002,

    // ==================== 3xxx: Payment ====================
    /// Ticket does not grant hotel access (remote, unpaid, or hotel not included)
    PaymentRequired = 3001,

    // ==================== 4xxx: Hotel ====================
    HotelNotFound = 4001,
    HotelListEmpty = 4002,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message sent when no custom one is given
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::EnrollmentNotFound => "Enrollment not found",
            ErrorCode::TicketNotFound => "Ticket not found",
            ErrorCode::PaymentRequired => "Payment required",
            ErrorCode::HotelNotFound => "Hotel not found",
            ErrorCode::HotelListEmpty => "No hotels found",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}
