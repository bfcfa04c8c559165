//! PostgreSQL-backed store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{
    Address, Enrollment, EnrollmentWithAddress, Hotel, HotelWithRooms, Payment, Room, Ticket,
    TicketStatus, TicketType, TicketWithType,
};
use sqlx::PgPool;

use super::{EntitlementRepository, HotelRepository, RepoResult, TicketRepository};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row of `tickets JOIN ticket_types`
#[derive(sqlx::FromRow)]
struct TicketWithTypeRow {
    id: i32,
    ticket_type_id: i32,
    enrollment_id: i32,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    type_name: String,
    type_price: i32,
    type_is_remote: bool,
    type_includes_hotel: bool,
    type_created_at: DateTime<Utc>,
    type_updated_at: DateTime<Utc>,
}

impl From<TicketWithTypeRow> for TicketWithType {
    fn from(row: TicketWithTypeRow) -> Self {
        Self {
            ticket: Ticket {
                id: row.id,
                ticket_type_id: row.ticket_type_id,
                enrollment_id: row.enrollment_id,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.type_is_remote,
                includes_hotel: row.type_includes_hotel,
                created_at: row.type_created_at,
                updated_at: row.type_updated_at,
            },
        }
    }
}

#[async_trait]
impl EntitlementRepository for PgStore {
    async fn find_enrollment_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> RepoResult<Option<EnrollmentWithAddress>> {
        let enrollment: Option<Enrollment> = sqlx::query_as(
            r#"
            SELECT id, name, cpf, birthday, phone, user_id, created_at, updated_at
            FROM enrollments
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(enrollment) = enrollment else {
            return Ok(None);
        };

        let address: Vec<Address> = sqlx::query_as(
            r#"
            SELECT id, cep, street, city, state, number, neighborhood, address_detail,
                   enrollment_id, created_at, updated_at
            FROM addresses
            WHERE enrollment_id = $1
            "#,
        )
        .bind(enrollment.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(EnrollmentWithAddress {
            enrollment,
            address,
        }))
    }

    async fn find_ticket_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> RepoResult<Option<Ticket>> {
        let ticket = sqlx::query_as(
            r#"
            SELECT id, ticket_type_id, enrollment_id, status, created_at, updated_at
            FROM tickets
            WHERE enrollment_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ticket)
    }

    async fn find_ticket_with_type_by_id(
        &self,
        ticket_id: i32,
    ) -> RepoResult<Option<TicketWithType>> {
        let row: Option<TicketWithTypeRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.ticket_type_id, t.enrollment_id, t.status, t.created_at, t.updated_at,
                   tt.name AS type_name,
                   tt.price AS type_price,
                   tt.is_remote AS type_is_remote,
                   tt.includes_hotel AS type_includes_hotel,
                   tt.created_at AS type_created_at,
                   tt.updated_at AS type_updated_at
            FROM tickets t
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.id = $1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(TicketWithType::from))
    }

    async fn find_payment_by_ticket_id(&self, ticket_id: i32) -> RepoResult<Option<Payment>> {
        let payment = sqlx::query_as(
            r#"
            SELECT id, ticket_id, value, card_issuer, card_last_digits, created_at, updated_at
            FROM payments
            WHERE ticket_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(payment)
    }
}

#[async_trait]
impl HotelRepository for PgStore {
    async fn find_hotels(&self) -> RepoResult<Vec<Hotel>> {
        let hotels = sqlx::query_as("SELECT id, name, image, created_at, updated_at FROM hotels")
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    async fn find_hotel_with_rooms(&self, hotel_id: i32) -> RepoResult<Option<HotelWithRooms>> {
        let hotel: Option<Hotel> = sqlx::query_as(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = $1",
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms: Vec<Room> = sqlx::query_as(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY id
            "#,
        )
        .bind(hotel.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(HotelWithRooms::new(hotel, rooms)))
    }
}

#[async_trait]
impl TicketRepository for PgStore {
    async fn find_ticket_types(&self) -> RepoResult<Vec<TicketType>> {
        let types = sqlx::query_as(
            r#"
            SELECT id, name, price, is_remote, includes_hotel, created_at, updated_at
            FROM ticket_types
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_find_hotel_with_rooms(pool: PgPool) -> sqlx::Result<()> {
        let hotel_id: i32 = sqlx::query_scalar(
            "INSERT INTO hotels (name, image) VALUES ('Driven Resort', 'https://example.com/r.png') RETURNING id",
        )
        .fetch_one(&pool)
        .await?;
        sqlx::query("INSERT INTO rooms (name, capacity, hotel_id) VALUES ('101', 2, $1), ('102', 3, $1)")
            .bind(hotel_id)
            .execute(&pool)
            .await?;

        let store = PgStore::new(pool);
        let found = store.find_hotel_with_rooms(hotel_id).await.unwrap().unwrap();
        assert_eq!(found.hotel.name, "Driven Resort");
        assert_eq!(found.rooms.len(), 2);
        assert!(found.rooms.iter().all(|r| r.hotel_id == hotel_id));

        assert!(store.find_hotel_with_rooms(hotel_id + 1).await.unwrap().is_none());
        assert_eq!(store.find_hotels().await.unwrap().len(), 1);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
    async fn test_entitlement_lookups(pool: PgPool) -> sqlx::Result<()> {
        let user_id: i32 = sqlx::query_scalar(
            "INSERT INTO users (email, password) VALUES ('guest@example.com', 'x') RETURNING id",
        )
        .fetch_one(&pool)
        .await?;
        let enrollment_id: i32 = sqlx::query_scalar(
            "INSERT INTO enrollments (name, cpf, birthday, phone, user_id) VALUES ('Guest', '00000000000', now(), '(21) 98999-9999', $1) RETURNING id",
        )
        .bind(user_id)
        .fetch_one(&pool)
        .await?;
        let type_id: i32 = sqlx::query_scalar(
            "INSERT INTO ticket_types (name, price, is_remote, includes_hotel) VALUES ('Presencial + Hotel', 600, false, true) RETURNING id",
        )
        .fetch_one(&pool)
        .await?;
        let ticket_id: i32 = sqlx::query_scalar(
            "INSERT INTO tickets (ticket_type_id, enrollment_id, status) VALUES ($1, $2, 'RESERVED') RETURNING id",
        )
        .bind(type_id)
        .bind(enrollment_id)
        .fetch_one(&pool)
        .await?;

        let store = PgStore::new(pool);
        let enrollment = store
            .find_enrollment_with_address_by_user_id(user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(enrollment.enrollment.id, enrollment_id);

        let ticket = store
            .find_ticket_by_enrollment_id(enrollment_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ticket.status, TicketStatus::Reserved);

        let with_type = store
            .find_ticket_with_type_by_id(ticket_id)
            .await
            .unwrap()
            .unwrap();
        assert!(with_type.ticket_type.allows_hotel_stay());

        assert!(store.find_payment_by_ticket_id(ticket_id).await.unwrap().is_none());

        let types = store.find_ticket_types().await.unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].id, type_id);
        Ok(())
    }
}
