//! Hotel entitlement check
//!
//! A user may see hotels only when all of these hold, checked in order:
//! enrollment exists → ticket exists → ticket type is in-person with hotel →
//! payment exists. The first failing step decides the denial.

use thiserror::Error;

use crate::db::{EntitlementRepository, RepoResult};

/// Outcome of the entitlement check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entitlement {
    Granted,
    Denied(EntitlementDenial),
}

/// Why a user may not see hotels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntitlementDenial {
    #[error("Enrollment not found")]
    EnrollmentNotFound,
    #[error("Ticket not found")]
    TicketNotFound,
    #[error("This event does not support hotel stay")]
    HotelNotIncluded,
    #[error("Payment wasn't concluded")]
    PaymentPending,
}

/// How a denial surfaces to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialKind {
    NotFound,
    Conflict,
}

impl EntitlementDenial {
    pub fn kind(&self) -> DenialKind {
        match self {
            Self::EnrollmentNotFound | Self::TicketNotFound => DenialKind::NotFound,
            Self::HotelNotIncluded | Self::PaymentPending => DenialKind::Conflict,
        }
    }
}

/// Run the entitlement chain for `user_id`
///
/// Store failures are returned as `Err`; a failed check is `Ok(Denied(..))`.
pub async fn check_hotel_entitlement<R>(repo: &R, user_id: i32) -> RepoResult<Entitlement>
where
    R: EntitlementRepository + ?Sized,
{
    let Some(enrollment) = repo.find_enrollment_with_address_by_user_id(user_id).await? else {
        return Ok(Entitlement::Denied(EntitlementDenial::EnrollmentNotFound));
    };

    let Some(ticket) = repo
        .find_ticket_by_enrollment_id(enrollment.enrollment.id)
        .await?
    else {
        return Ok(Entitlement::Denied(EntitlementDenial::TicketNotFound));
    };

    // A ticket always references an existing type; a dangling one counts as no ticket.
    let Some(with_type) = repo.find_ticket_with_type_by_id(ticket.id).await? else {
        return Ok(Entitlement::Denied(EntitlementDenial::TicketNotFound));
    };

    if !with_type.ticket_type.allows_hotel_stay() {
        return Ok(Entitlement::Denied(EntitlementDenial::HotelNotIncluded));
    }

    if repo.find_payment_by_ticket_id(ticket.id).await?.is_none() {
        return Ok(Entitlement::Denied(EntitlementDenial::PaymentPending));
    }

    Ok(Entitlement::Granted)
}
