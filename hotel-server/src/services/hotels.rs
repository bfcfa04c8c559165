//! Hotel query service

use std::sync::Arc;

use shared::models::{Hotel, HotelWithRooms};

use super::entitlement::{DenialKind, Entitlement, check_hotel_entitlement};
use crate::db::HotelStore;
use crate::error::{ServiceError, ServiceResult};

#[derive(Clone)]
pub struct HotelService {
    store: Arc<dyn HotelStore>,
}

impl HotelService {
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }

    async fn ensure_entitled(&self, user_id: i32) -> ServiceResult<()> {
        match check_hotel_entitlement(self.store.as_ref(), user_id).await? {
            Entitlement::Granted => Ok(()),
            Entitlement::Denied(denial) => {
                match denial.kind() {
                    DenialKind::NotFound => {
                        tracing::debug!(user_id, reason = %denial, "Hotel access denied")
                    }
                    DenialKind::Conflict => {
                        tracing::info!(user_id, reason = %denial, "Hotel access denied")
                    }
                }
                Err(denial.into())
            }
        }
    }

    /// All hotels, for an entitled user
    ///
    /// An empty hotel table is reported as `HotelListEmpty`.
    pub async fn list_hotels(&self, user_id: i32) -> ServiceResult<Vec<Hotel>> {
        self.ensure_entitled(user_id).await?;

        let hotels = self.store.find_hotels().await?;
        if hotels.is_empty() {
            return Err(ServiceError::HotelListEmpty);
        }
        Ok(hotels)
    }

    /// One hotel with its rooms, for an entitled user
    ///
    /// `hotel_id` is `None` when the requested id is not a number; that
    /// lookup matches no hotel. Entitlement is checked before the read.
    pub async fn list_rooms(
        &self,
        hotel_id: Option<i32>,
        user_id: i32,
    ) -> ServiceResult<HotelWithRooms> {
        self.ensure_entitled(user_id).await?;

        let Some(id) = hotel_id else {
            return Err(ServiceError::HotelNotFound(None));
        };
        self.store
            .find_hotel_with_rooms(id)
            .await?
            .ok_or(ServiceError::HotelNotFound(Some(id)))
    }
}
