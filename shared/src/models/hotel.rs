//! Hotel Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hotel entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    /// Image URL
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Room entity (belongs to one hotel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hotel with its rooms embedded
///
/// Serialized as the hotel's own fields plus a `Rooms` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn new(hotel: Hotel, rooms: Vec<Room>) -> Self {
        Self { hotel, rooms }
    }
}
