// ── Remote collaborator seam ──
//
// Workflows talk to the reservation service through `BookingService`
// rather than `ApiClient` directly, so tests can substitute a recording
// fake. `ApiClient` implements it by delegating to its inherent methods.

use std::future::Future;

use roombook_api::{
    ApiClient, BookingId, BookingPayload, BookingRecord, Error, Room, UserCommand, UserId,
    UserRecord,
};
use secrecy::SecretString;

use crate::time::UtcTimeRange;

/// Operations of the reservation service used by the core workflows.
///
/// Every method performs exactly one remote call. Payload times are UTC.
pub trait BookingService: Sync {
    fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<BookingRecord, Error>> + Send;

    fn update_booking(
        &self,
        id: BookingId,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<BookingRecord, Error>> + Send;

    fn list_bookings_for_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<BookingRecord>, Error>> + Send;

    fn delete_booking(&self, id: BookingId) -> impl Future<Output = Result<(), Error>> + Send;

    fn list_available_rooms(&self) -> impl Future<Output = Result<Vec<Room>, Error>> + Send;

    fn list_rooms_for_slot(
        &self,
        range: &UtcTimeRange,
    ) -> impl Future<Output = Result<Vec<Room>, Error>> + Send;

    fn create_user(
        &self,
        command: &UserCommand,
    ) -> impl Future<Output = Result<UserRecord, Error>> + Send;

    fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> impl Future<Output = Result<UserRecord, Error>> + Send;

    fn get_user(&self, id: UserId) -> impl Future<Output = Result<UserRecord, Error>> + Send;

    fn update_user(
        &self,
        id: UserId,
        command: &UserCommand,
    ) -> impl Future<Output = Result<UserRecord, Error>> + Send;

    fn delete_user(&self, id: UserId) -> impl Future<Output = Result<(), Error>> + Send;
}

impl BookingService for ApiClient {
    fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<BookingRecord, Error>> + Send {
        ApiClient::create_booking(self, payload)
    }

    fn update_booking(
        &self,
        id: BookingId,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<BookingRecord, Error>> + Send {
        ApiClient::update_booking(self, id, payload)
    }

    fn list_bookings_for_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<BookingRecord>, Error>> + Send {
        ApiClient::list_bookings_for_user(self, user_id)
    }

    fn delete_booking(&self, id: BookingId) -> impl Future<Output = Result<(), Error>> + Send {
        ApiClient::delete_booking(self, id)
    }

    fn list_available_rooms(&self) -> impl Future<Output = Result<Vec<Room>, Error>> + Send {
        ApiClient::list_available_rooms(self)
    }

    fn list_rooms_for_slot(
        &self,
        range: &UtcTimeRange,
    ) -> impl Future<Output = Result<Vec<Room>, Error>> + Send {
        ApiClient::list_rooms_for_slot(self, range.start(), range.end())
    }

    fn create_user(
        &self,
        command: &UserCommand,
    ) -> impl Future<Output = Result<UserRecord, Error>> + Send {
        ApiClient::create_user(self, command)
    }

    fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> impl Future<Output = Result<UserRecord, Error>> + Send {
        ApiClient::login(self, email, password)
    }

    fn get_user(&self, id: UserId) -> impl Future<Output = Result<UserRecord, Error>> + Send {
        ApiClient::get_user(self, id)
    }

    fn update_user(
        &self,
        id: UserId,
        command: &UserCommand,
    ) -> impl Future<Output = Result<UserRecord, Error>> + Send {
        ApiClient::update_user(self, id, command)
    }

    fn delete_user(&self, id: UserId) -> impl Future<Output = Result<(), Error>> + Send {
        ApiClient::delete_user(self, id)
    }
}
