//! Ticket API endpoints

use axum::{Extension, Json, extract::State};
use shared::error::AppError;
use shared::models::{TicketType, TicketWithType};

use crate::auth::AuthenticatedUser;
use crate::state::AppState;

/// GET /tickets/types
pub async fn list_ticket_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<TicketType>>, AppError> {
    Ok(Json(state.tickets.list_ticket_types().await?))
}

/// GET /tickets
pub async fn get_user_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<TicketWithType>, AppError> {
    let ticket = state.tickets.get_user_ticket(user.user_id).await?;
    Ok(Json(ticket))
}
