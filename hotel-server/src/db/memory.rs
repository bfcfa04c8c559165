//! In-process store
//!
//! Holds every table in memory behind one lock. Used as a drop-in
//! replacement for [`super::PgStore`] when no database is wanted, and as
//! the fixture store of the HTTP tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use shared::models::{
    Address, Enrollment, EnrollmentWithAddress, Hotel, HotelWithRooms, Payment, Room, Ticket,
    TicketStatus, TicketType, TicketWithType,
};
use tokio::sync::RwLock;

use super::{EntitlementRepository, HotelRepository, RepoResult, TicketRepository};

#[derive(Default)]
struct Tables {
    next_id: i32,
    enrollments: Vec<Enrollment>,
    addresses: Vec<Address>,
    ticket_types: Vec<TicketType>,
    tickets: Vec<Ticket>,
    payments: Vec<Payment>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an enrollment for `user_id` together with one address
    pub async fn insert_enrollment_with_address(&self, user_id: i32, name: &str) -> Enrollment {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let enrollment = Enrollment {
            id: tables.next_id(),
            name: name.to_string(),
            cpf: "00000000000".into(),
            birthday: now,
            phone: "(21) 98999-9999".into(),
            user_id,
            created_at: now,
            updated_at: now,
        };
        let address = Address {
            id: tables.next_id(),
            cep: "20000-000".into(),
            street: "Rua Primeiro de Março".into(),
            city: "Rio de Janeiro".into(),
            state: "RJ".into(),
            number: "1".into(),
            neighborhood: "Centro".into(),
            address_detail: None,
            enrollment_id: enrollment.id,
            created_at: now,
            updated_at: now,
        };
        tables.enrollments.push(enrollment.clone());
        tables.addresses.push(address);
        enrollment
    }

    pub async fn insert_ticket_type(
        &self,
        name: &str,
        price: i32,
        is_remote: bool,
        includes_hotel: bool,
    ) -> TicketType {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let ticket_type = TicketType {
            id: tables.next_id(),
            name: name.to_string(),
            price,
            is_remote,
            includes_hotel,
            created_at: now,
            updated_at: now,
        };
        tables.ticket_types.push(ticket_type.clone());
        ticket_type
    }

    pub async fn insert_ticket(
        &self,
        enrollment_id: i32,
        ticket_type_id: i32,
        status: TicketStatus,
    ) -> Ticket {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let ticket = Ticket {
            id: tables.next_id(),
            ticket_type_id,
            enrollment_id,
            status,
            created_at: now,
            updated_at: now,
        };
        tables.tickets.push(ticket.clone());
        ticket
    }

    pub async fn insert_payment(&self, ticket_id: i32, value: i32) -> Payment {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let payment = Payment {
            id: tables.next_id(),
            ticket_id,
            value,
            card_issuer: "VISA".into(),
            card_last_digits: "4242".into(),
            created_at: now,
            updated_at: now,
        };
        tables.payments.push(payment.clone());
        payment
    }

    pub async fn insert_hotel(&self, name: &str, image: &str) -> Hotel {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let hotel = Hotel {
            id: tables.next_id(),
            name: name.to_string(),
            image: image.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.hotels.push(hotel.clone());
        hotel
    }

    pub async fn insert_room(&self, hotel_id: i32, name: &str, capacity: i32) -> Room {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let room = Room {
            id: tables.next_id(),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        tables.rooms.push(room.clone());
        room
    }
}

#[async_trait]
impl EntitlementRepository for MemoryStore {
    async fn find_enrollment_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> RepoResult<Option<EnrollmentWithAddress>> {
        let tables = self.tables.read().await;
        let Some(enrollment) = tables.enrollments.iter().find(|e| e.user_id == user_id) else {
            return Ok(None);
        };
        let address = tables
            .addresses
            .iter()
            .filter(|a| a.enrollment_id == enrollment.id)
            .cloned()
            .collect();
        Ok(Some(EnrollmentWithAddress {
            enrollment: enrollment.clone(),
            address,
        }))
    }

    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> RepoResult<Option<Ticket>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tickets
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }

    async fn find_ticket_with_type_by_id(
        &self,
        ticket_id: i32,
    ) -> RepoResult<Option<TicketWithType>> {
        let tables = self.tables.read().await;
        let Some(ticket) = tables.tickets.iter().find(|t| t.id == ticket_id) else {
            return Ok(None);
        };
        Ok(tables
            .ticket_types
            .iter()
            .find(|tt| tt.id == ticket.ticket_type_id)
            .map(|ticket_type| TicketWithType {
                ticket: ticket.clone(),
                ticket_type: ticket_type.clone(),
            }))
    }

    async fn find_payment_by_ticket_id(&self, ticket_id: i32) -> RepoResult<Option<Payment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .payments
            .iter()
            .find(|p| p.ticket_id == ticket_id)
            .cloned())
    }
}

#[async_trait]
impl HotelRepository for MemoryStore {
    async fn find_hotels(&self) -> RepoResult<Vec<Hotel>> {
        Ok(self.tables.read().await.hotels.clone())
    }

    async fn find_hotel_with_rooms(&self, hotel_id: i32) -> RepoResult<Option<HotelWithRooms>> {
        let tables = self.tables.read().await;
        let Some(hotel) = tables.hotels.iter().find(|h| h.id == hotel_id) else {
            return Ok(None);
        };
        let rooms = tables
            .rooms
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect();
        Ok(Some(HotelWithRooms::new(hotel.clone(), rooms)))
    }
}

#[async_trait]
impl TicketRepository for MemoryStore {
    async fn find_ticket_types(&self) -> RepoResult<Vec<TicketType>> {
        let mut types = self.tables.read().await.ticket_types.clone();
        types.sort_by_key(|t| t.id);
        Ok(types)
    }
}
