// Booking endpoints
//
// Create, update, list-by-user and delete. Payload times are sent exactly
// as given; local-to-UTC conversion is the caller's job.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{BookingId, BookingPayload, BookingRecord, UserId};

impl ApiClient {
    /// Create a booking.
    ///
    /// `POST bookings`, returning the stored record. HTTP 409 means the
    /// room is already taken for an overlapping slot.
    pub async fn create_booking(&self, payload: &BookingPayload) -> Result<BookingRecord, Error> {
        debug!(room_id = payload.room_id, user_id = payload.user_id, "creating booking");
        self.post("bookings", payload).await
    }

    /// Replace an existing booking.
    ///
    /// `PUT bookings/{id}`
    pub async fn update_booking(
        &self,
        id: BookingId,
        payload: &BookingPayload,
    ) -> Result<BookingRecord, Error> {
        debug!(id, room_id = payload.room_id, "updating booking");
        self.put(&format!("bookings/{id}"), payload).await
    }

    /// All bookings owned by a user.
    ///
    /// `GET bookings/user/{userId}`
    pub async fn list_bookings_for_user(&self, user_id: UserId) -> Result<Vec<BookingRecord>, Error> {
        self.get(&format!("bookings/user/{user_id}")).await
    }

    /// Delete a booking.
    ///
    /// `DELETE bookings/{id}`
    pub async fn delete_booking(&self, id: BookingId) -> Result<(), Error> {
        debug!(id, "deleting booking");
        self.delete(&format!("bookings/{id}")).await
    }
}
