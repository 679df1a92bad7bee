use roombook_api::{BookingId, BookingPayload, RoomId, UserId};

use crate::time::UtcTimeRange;

/// A booking ready to send: times already in UTC.
///
/// Without an id this creates a booking; with one it replaces the booking
/// of that id. Values are immutable; the `with_*` methods return an
/// amended copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    id: Option<BookingId>,
    range: UtcTimeRange,
    room_id: RoomId,
    room_name: String,
    user_id: UserId,
}

impl BookingRequest {
    pub fn new(
        id: Option<BookingId>,
        range: UtcTimeRange,
        room_id: RoomId,
        room_name: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            range,
            room_id,
            room_name: room_name.into(),
            user_id,
        }
    }

    pub fn id(&self) -> Option<BookingId> {
        self.id
    }

    pub fn range(&self) -> &UtcTimeRange {
        &self.range
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub fn with_range(&self, range: UtcTimeRange) -> Self {
        Self {
            range,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_room(&self, room_id: RoomId, room_name: impl Into<String>) -> Self {
        Self {
            room_id,
            room_name: room_name.into(),
            ..self.clone()
        }
    }

    /// Wire body for `POST bookings` / `PUT bookings/{id}`.
    pub fn to_payload(&self) -> BookingPayload {
        BookingPayload {
            id: self.id,
            start_time: self.range.start(),
            end_time: self.range.end(),
            room_id: self.room_id,
            room_name: self.room_name.clone(),
            user_id: self.user_id,
        }
    }
}
