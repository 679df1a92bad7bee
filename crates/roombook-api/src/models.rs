// ── Wire types for the reservation API ──
//
// Field names follow the service's camelCase JSON. Records are what the
// server returns and is authoritative for; payloads and commands are what
// we send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type BookingId = i64;
pub type RoomId = i64;
pub type UserId = i64;

// ── Bookings ───────────────────────────────────────────────────────

/// A booking as stored by the server. Times are UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: BookingId,
    #[serde(with = "crate::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub end_time: DateTime<Utc>,
    pub room_id: RoomId,
    /// Display only; the server may leave it empty.
    #[serde(default)]
    pub room_name: String,
    pub user_id: UserId,
}

/// Request body for `POST bookings` and `PUT bookings/{id}`.
///
/// `id` is omitted on create. Times must already be UTC; this type never
/// converts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<BookingId>,
    #[serde(with = "crate::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub end_time: DateTime<Utc>,
    pub room_id: RoomId,
    #[serde(default)]
    pub room_name: String,
    pub user_id: UserId,
}

// ── Rooms ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

// ── Users ──────────────────────────────────────────────────────────

/// A user account as returned by the server.
///
/// The server echoes the stored password hash in its user payloads; it is
/// deliberately not modelled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<i64>,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request body for `POST users` and `PUT users/{id}`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for UserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCommand")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
