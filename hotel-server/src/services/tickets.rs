//! Ticket reads for the signed-in user

use std::sync::Arc;

use shared::models::{TicketType, TicketWithType};

use crate::db::HotelStore;
use crate::error::{TicketError, TicketResult};

#[derive(Clone)]
pub struct TicketService {
    store: Arc<dyn HotelStore>,
}

impl TicketService {
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }

    /// Every ticket type on sale; an empty catalogue is an empty list
    pub async fn list_ticket_types(&self) -> TicketResult<Vec<TicketType>> {
        Ok(self.store.find_ticket_types().await?)
    }

    /// The user's ticket together with its type
    ///
    /// Walks enrollment → ticket → ticket type, the same lookups the hotel
    /// entitlement check starts with.
    pub async fn get_user_ticket(&self, user_id: i32) -> TicketResult<TicketWithType> {
        let enrollment = self
            .store
            .find_enrollment_with_address_by_user_id(user_id)
            .await?
            .ok_or(TicketError::EnrollmentNotFound)?;

        let ticket = self
            .store
            .find_ticket_by_enrollment_id(enrollment.enrollment.id)
            .await?
            .ok_or(TicketError::TicketNotFound)?;

        self.store
            .find_ticket_with_type_by_id(ticket.id)
            .await?
            .ok_or(TicketError::TicketNotFound)
    }
}
