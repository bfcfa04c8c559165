//! Unified service-layer error type for hotel-server
//!
//! `ServiceError` bridges store failures (`RepoError`) and entitlement
//! denials to the API-layer error (`AppError`) for the hotel routes;
//! `TicketError` does the same for the ticket routes.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::RepoError;
use crate::services::entitlement::EntitlementDenial;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The user failed the entitlement check
    #[error(transparent)]
    Denied(#[from] EntitlementDenial),
    /// The hotel table is empty
    #[error("No hotels registered")]
    HotelListEmpty,
    /// No hotel with this id (`None`: the id did not parse)
    #[error("Hotel {0:?} not found")]
    HotelNotFound(Option<i32>),
    /// Database or infrastructure error
    #[error(transparent)]
    Db(#[from] RepoError),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Denied(denial) => match denial {
                EntitlementDenial::EnrollmentNotFound => {
                    AppError::new(ErrorCode::EnrollmentNotFound)
                }
                EntitlementDenial::TicketNotFound => AppError::new(ErrorCode::TicketNotFound),
                EntitlementDenial::HotelNotIncluded | EntitlementDenial::PaymentPending => {
                    AppError::payment_required()
                }
            },
            ServiceError::HotelListEmpty => AppError::new(ErrorCode::HotelListEmpty),
            ServiceError::HotelNotFound(Some(id)) => {
                AppError::new(ErrorCode::HotelNotFound).with_detail("hotel_id", id)
            }
            ServiceError::HotelNotFound(None) => AppError::new(ErrorCode::HotelNotFound),
            // Every failure that is not a missing resource surfaces as 402
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::payment_required()
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures of the ticket reads; a store failure answers 500
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("Enrollment not found")]
    EnrollmentNotFound,
    #[error("Ticket not found")]
    TicketNotFound,
    #[error(transparent)]
    Db(#[from] RepoError),
}

impl From<TicketError> for AppError {
    fn from(e: TicketError) -> Self {
        match e {
            TicketError::EnrollmentNotFound => AppError::new(ErrorCode::EnrollmentNotFound),
            TicketError::TicketNotFound => AppError::new(ErrorCode::TicketNotFound),
            TicketError::Db(db_err) => {
                tracing::error!(error = %db_err, "Ticket database error");
                AppError::internal()
            }
        }
    }
}

pub type TicketResult<T> = Result<T, TicketError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn status_of(e: ServiceError) -> StatusCode {
        AppError::from(e).http_status()
    }

    #[test]
    fn test_not_found_denials_map_to_404() {
        let err = AppError::from(ServiceError::Denied(EntitlementDenial::EnrollmentNotFound));
        assert_eq!(err.code, ErrorCode::EnrollmentNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::from(ServiceError::Denied(EntitlementDenial::TicketNotFound));
        assert_eq!(err.code, ErrorCode::TicketNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_denials_collapse_to_402() {
        for denial in [
            EntitlementDenial::HotelNotIncluded,
            EntitlementDenial::PaymentPending,
        ] {
            let err = AppError::from(ServiceError::Denied(denial));
            assert_eq!(err.code, ErrorCode::PaymentRequired);
            assert_eq!(err.message, "Payment required");
        }
    }

    #[test]
    fn test_hotel_errors_map_to_404() {
        assert_eq!(status_of(ServiceError::HotelListEmpty), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ServiceError::HotelNotFound(Some(3))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::HotelNotFound(None)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_db_error_maps_to_402() {
        let err = ServiceError::Db(RepoError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(status_of(err), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_ticket_errors() {
        let err = AppError::from(TicketError::EnrollmentNotFound);
        assert_eq!(err.code, ErrorCode::EnrollmentNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::from(TicketError::TicketNotFound);
        assert_eq!(err.code, ErrorCode::TicketNotFound);

        let err = AppError::from(TicketError::Db(RepoError::Database(
            sqlx::Error::PoolTimedOut,
        )));
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }
}
