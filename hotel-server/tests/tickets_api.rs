//! End-to-end tests for the ticket routes

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hotel_server::auth::user_auth::create_token;
use hotel_server::db::MemoryStore;
use hotel_server::{AppState, create_router};
use shared::models::TicketStatus;

const SECRET: &str = "ticket-test-secret";
const USER: i32 = 7;

fn router(store: &MemoryStore) -> Router {
    create_router(AppState::with_store(Arc::new(store.clone()), SECRET))
}

async fn get(router: Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let response = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn token() -> String {
    create_token(USER, SECRET).unwrap()
}

#[tokio::test]
async fn test_ticket_routes_require_token() {
    let store = MemoryStore::new();
    for path in ["/tickets", "/tickets/types"] {
        let (status, _) = get(router(&store), path, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_ticket_types_empty_catalogue() {
    let store = MemoryStore::new();
    let (status, body) = get(router(&store), "/tickets/types", Some(&token())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_ticket_types_lists_every_type() {
    let store = MemoryStore::new();
    let online = store.insert_ticket_type("Online", 100, true, false).await;
    let hotel = store
        .insert_ticket_type("Presencial + Hotel", 600, false, true)
        .await;

    let (status, body) = get(router(&store), "/tickets/types", Some(&token())).await;
    assert_eq!(status, StatusCode::OK);

    let types = body.as_array().unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0]["id"], online.id);
    assert_eq!(types[0]["isRemote"], true);
    assert_eq!(types[0]["includesHotel"], false);
    assert_eq!(types[1]["id"], hotel.id);
    assert_eq!(types[1]["name"], "Presencial + Hotel");
    assert_eq!(types[1]["price"], 600);
    assert!(types[1]["createdAt"].is_string());
}

#[tokio::test]
async fn test_user_ticket_without_enrollment_is_not_found() {
    let store = MemoryStore::new();
    let (status, body) = get(router(&store), "/tickets", Some(&token())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2001);
}

#[tokio::test]
async fn test_user_ticket_without_ticket_is_not_found() {
    let store = MemoryStore::new();
    store.insert_enrollment_with_address(USER, "Guest").await;

    let (status, body) = get(router(&store), "/tickets", Some(&token())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn test_user_ticket_embeds_its_type() {
    let store = MemoryStore::new();
    let enrollment = store.insert_enrollment_with_address(USER, "Guest").await;
    let ticket_type = store.insert_ticket_type("Online", 100, true, false).await;
    let ticket = store
        .insert_ticket(enrollment.id, ticket_type.id, TicketStatus::Reserved)
        .await;

    // Entitlement plays no part here: a remote, unpaid ticket is still returned
    let (status, body) = get(router(&store), "/tickets", Some(&token())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], ticket.id);
    assert_eq!(body["status"], "RESERVED");
    assert_eq!(body["enrollmentId"], enrollment.id);
    assert_eq!(body["ticketTypeId"], ticket_type.id);
    assert_eq!(body["TicketType"]["id"], ticket_type.id);
    assert_eq!(body["TicketType"]["isRemote"], true);
}

#[tokio::test]
async fn test_user_ticket_only_for_the_caller() {
    let store = MemoryStore::new();
    let other = store.insert_enrollment_with_address(USER + 1, "Other").await;
    let ticket_type = store.insert_ticket_type("Online", 100, true, false).await;
    store
        .insert_ticket(other.id, ticket_type.id, TicketStatus::Paid)
        .await;

    let (status, _) = get(router(&store), "/tickets", Some(&token())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
