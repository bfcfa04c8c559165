//! API routes for hotel-server

pub mod health;
pub mod hotels;
pub mod tickets;

use crate::auth::user_auth_middleware;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Hotel and ticket queries (JWT authenticated)
    let protected = Router::new()
        .route("/hotels", get(hotels::list_hotels))
        .route("/hotels/{hotel_id}", get(hotels::list_hotel_rooms))
        .route("/tickets", get(tickets::get_user_ticket))
        .route("/tickets/types", get(tickets::list_ticket_types))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
