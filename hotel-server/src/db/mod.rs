//! Database access layer
//!
//! Read-only lookups behind three traits so the store can be injected:
//! [`PgStore`] talks to PostgreSQL, [`MemoryStore`] keeps rows in process.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use shared::models::{
    EnrollmentWithAddress, Hotel, HotelWithRooms, Payment, Ticket, TicketType, TicketWithType,
};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Enrollment, ticket and payment lookups backing the entitlement check
#[async_trait]
pub trait EntitlementRepository: Send + Sync {
    async fn find_enrollment_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> RepoResult<Option<EnrollmentWithAddress>>;

    async fn find_ticket_by_enrollment_id(&self, enrollment_id: i32)
    -> RepoResult<Option<Ticket>>;

    async fn find_ticket_with_type_by_id(&self, ticket_id: i32)
    -> RepoResult<Option<TicketWithType>>;

    async fn find_payment_by_ticket_id(&self, ticket_id: i32) -> RepoResult<Option<Payment>>;
}

/// Hotel and room reads
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// All hotels, store-default order
    async fn find_hotels(&self) -> RepoResult<Vec<Hotel>>;

    /// One hotel with its rooms, `None` if the id is unknown
    async fn find_hotel_with_rooms(&self, hotel_id: i32) -> RepoResult<Option<HotelWithRooms>>;
}

/// Ticket catalogue reads
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Every ticket type, ordered by id
    async fn find_ticket_types(&self) -> RepoResult<Vec<TicketType>>;
}

/// Everything the hotel and ticket endpoints read from
pub trait HotelStore: EntitlementRepository + HotelRepository + TicketRepository {}

impl<T: EntitlementRepository + HotelRepository + TicketRepository> HotelStore for T {}
