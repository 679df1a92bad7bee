// roombook-api: Async Rust client for the room reservation REST API

pub mod auth;
pub mod bookings;
pub mod client;
pub mod error;
pub mod models;
pub mod rooms;
pub mod timestamp;
pub mod transport;
pub mod users;

pub use auth::BasicAuth;
pub use client::ApiClient;
pub use error::Error;
pub use models::{
    BookingId, BookingPayload, BookingRecord, Room, RoomId, UserCommand, UserId, UserRecord,
};
pub use transport::{TlsMode, TransportConfig};
