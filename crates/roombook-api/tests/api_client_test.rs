#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roombook_api::{ApiClient, BasicAuth, BookingPayload, Error, UserCommand};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri());
    let client = ApiClient::from_reqwest(&base, reqwest::Client::new(), BasicAuth::default()).unwrap();
    (server, client)
}

fn booking_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "startTime": "2024-06-01T14:00:00",
        "endTime": "2024-06-01T15:00:00",
        "roomId": 3,
        "roomName": "Aurora",
        "userId": 7
    })
}

fn payload(id: Option<i64>) -> BookingPayload {
    BookingPayload {
        id,
        start_time: Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap(),
        room_id: 3,
        room_name: "Aurora".into(),
        user_id: 7,
    }
}

// ── Booking tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_create_booking_sends_utc_body_with_basic_auth() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .and(basic_auth("admin", "admin"))
        .and(body_json(json!({
            "startTime": "2024-06-01T14:00:00",
            "endTime": "2024-06-01T15:00:00",
            "roomId": 3,
            "roomName": "Aurora",
            "userId": 7
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(booking_json(11)))
        .expect(1)
        .mount(&server)
        .await;

    let record = client.create_booking(&payload(None)).await.unwrap();

    assert_eq!(record.id, 11);
    assert_eq!(record.room_name, "Aurora");
    assert_eq!(record.start_time, Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap());
}

#[tokio::test]
async fn test_update_booking_uses_put_on_id() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/bookings/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(booking_json(42)))
        .expect(1)
        .mount(&server)
        .await;

    let record = client.update_booking(42, &payload(Some(42))).await.unwrap();
    assert_eq!(record.id, 42);
}

#[tokio::test]
async fn test_create_booking_conflict() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Room already booked"))
        .mount(&server)
        .await;

    let err = client.create_booking(&payload(None)).await.unwrap_err();

    assert!(err.is_conflict(), "expected conflict, got: {err:?}");
    assert_eq!(err.server_message(), Some("Room already booked"));
}

#[tokio::test]
async fn test_list_bookings_for_user() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/bookings/user/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([booking_json(1), booking_json(2)])))
        .mount(&server)
        .await;

    let bookings = client.list_bookings_for_user(7).await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[1].id, 2);
    assert_eq!(bookings[0].user_id, 7);
}

#[tokio::test]
async fn test_delete_booking_accepts_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/bookings/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_booking(5).await.unwrap();
}

// ── Room tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_available_rooms() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Aurora", "capacity": 8 },
            { "id": 2, "name": "Borealis", "capacity": 4 }
        ])))
        .mount(&server)
        .await;

    let rooms = client.list_available_rooms().await.unwrap();

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].name, "Aurora");
    assert_eq!(rooms[1].capacity, 4);
}

#[tokio::test]
async fn test_list_rooms_for_slot_sends_wire_timestamps() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/rooms/available"))
        .and(query_param("startTime", "2024-06-01T14:00:00"))
        .and(query_param("endTime", "2024-06-01T15:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "name": "Borealis", "capacity": 4 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = client
        .list_rooms_for_slot(
            Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, 2);
}

// ── User tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "ada@example.com", "password": "analytical" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "$2a$10$hash"
        })))
        .mount(&server)
        .await;

    let secret = SecretString::from("analytical".to_owned());
    let user = client.login("ada@example.com", &secret).await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn test_login_failure_keeps_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let secret = SecretString::from("wrong".to_owned());
    let err = client.login("ada@example.com", &secret).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "error": "Bad Request",
            "message": "Email already exists"
        })))
        .mount(&server)
        .await;

    let command = UserCommand {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        password: "analytical".into(),
    };
    let err = client.create_user(&command).await.unwrap_err();

    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some("Email already exists"));
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_and_delete_user() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "cardId": 1234
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.get_user(7).await.unwrap();
    assert_eq!(user.card_id, Some(1234));

    client.delete_user(7).await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_malformed_success_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.list_available_rooms().await.unwrap_err();

    match err {
        Error::Deserialization { ref body, .. } => assert!(body.contains("maintenance")),
        ref other => panic!("expected Deserialization error, got: {other:?}"),
    }
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_server_error_message_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/bookings/user/7"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream database offline"))
        .mount(&server)
        .await;

    let err = client.list_bookings_for_user(7).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.server_message(), Some("upstream database offline"));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_connection_refused_is_transport() {
    let client = ApiClient::from_reqwest(
        "http://127.0.0.1:9/api/",
        reqwest::Client::new(),
        BasicAuth::default(),
    )
    .unwrap();

    let err = client.list_available_rooms().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert!(err.is_transport());
}
