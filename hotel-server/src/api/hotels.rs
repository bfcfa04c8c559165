//! Hotel API endpoints

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::error::AppError;
use shared::models::{Hotel, HotelWithRooms};

use crate::auth::AuthenticatedUser;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// GET /hotels
pub async fn list_hotels(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Vec<Hotel>> {
    let hotels = state.hotels.list_hotels(user.user_id).await?;
    Ok(Json(hotels))
}

/// GET /hotels/{hotel_id}
///
/// The id must be a plain base-10 `i32`: ASCII digits with an optional
/// leading `+` or `-`. Whitespace, exponents (`1e1`), hex (`0x1`),
/// fractions and out-of-range values are not ids; they are looked up like
/// any unknown id and answer 404 once the caller is entitled.
pub async fn list_hotel_rooms(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(hotel_id): Path<String>,
) -> ApiResult<HotelWithRooms> {
    let hotel_id = hotel_id.parse::<i32>().ok();
    let hotel = state.hotels.list_rooms(hotel_id, user.user_id).await?;
    Ok(Json(hotel))
}
