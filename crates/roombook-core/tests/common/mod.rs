// Recording fake of the reservation service.
//
// Every call is logged; the reply is scripted per fake. Successful
// booking calls echo the payload back as the stored record.

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use roombook_api::{
    BookingId, BookingPayload, BookingRecord, Error, Room, UserCommand, UserId, UserRecord,
};
use roombook_core::{BookingForm, BookingService, UtcTimeRange};
use secrecy::SecretString;

pub const CREATED_ID: BookingId = 101;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateBooking(BookingPayload),
    UpdateBooking(BookingId, BookingPayload),
    ListBookings(UserId),
    DeleteBooking(BookingId),
    ListRooms,
    RoomsForSlot(DateTime<Utc>, DateTime<Utc>),
    CreateUser(String),
    Login(String),
    GetUser(UserId),
    UpdateUser(UserId),
    DeleteUser(UserId),
}

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Ok,
    Http(u16, Option<&'static str>),
    Timeout,
}

pub struct RecordingService {
    calls: Mutex<Vec<Call>>,
    reply: Reply,
    bookings: Vec<BookingRecord>,
}

impl RecordingService {
    pub fn ok() -> Self {
        Self::replying(Reply::Ok)
    }

    pub fn replying(reply: Reply) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
            bookings: Vec::new(),
        }
    }

    pub fn with_bookings(mut self, bookings: Vec<BookingRecord>) -> Self {
        self.bookings = bookings;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(&self, call: Call, ok: impl FnOnce() -> T) -> Result<T, Error> {
        self.calls.lock().unwrap().push(call);
        match self.reply {
            Reply::Ok => Ok(ok()),
            Reply::Http(status, message) => Err(Error::Http {
                status,
                message: message.map(str::to_owned),
            }),
            Reply::Timeout => Err(Error::Timeout { timeout_secs: 30 }),
        }
    }
}

fn stored(id: BookingId, payload: &BookingPayload) -> BookingRecord {
    BookingRecord {
        id,
        start_time: payload.start_time,
        end_time: payload.end_time,
        room_id: payload.room_id,
        room_name: payload.room_name.clone(),
        user_id: payload.user_id,
    }
}

pub fn ada(id: UserId) -> UserRecord {
    UserRecord {
        id,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        card_id: None,
    }
}

pub fn aurora() -> Room {
    Room {
        id: 3,
        name: "Aurora".into(),
        capacity: 8,
    }
}

impl BookingService for RecordingService {
    async fn create_booking(&self, payload: &BookingPayload) -> Result<BookingRecord, Error> {
        self.record(Call::CreateBooking(payload.clone()), || stored(CREATED_ID, payload))
    }

    async fn update_booking(
        &self,
        id: BookingId,
        payload: &BookingPayload,
    ) -> Result<BookingRecord, Error> {
        self.record(Call::UpdateBooking(id, payload.clone()), || stored(id, payload))
    }

    async fn list_bookings_for_user(&self, user_id: UserId) -> Result<Vec<BookingRecord>, Error> {
        self.record(Call::ListBookings(user_id), || self.bookings.clone())
    }

    async fn delete_booking(&self, id: BookingId) -> Result<(), Error> {
        self.record(Call::DeleteBooking(id), || ())
    }

    async fn list_available_rooms(&self) -> Result<Vec<Room>, Error> {
        self.record(Call::ListRooms, || vec![aurora()])
    }

    async fn list_rooms_for_slot(&self, range: &UtcTimeRange) -> Result<Vec<Room>, Error> {
        self.record(Call::RoomsForSlot(range.start(), range.end()), || vec![aurora()])
    }

    async fn create_user(&self, command: &UserCommand) -> Result<UserRecord, Error> {
        self.record(Call::CreateUser(command.email.clone()), || ada(7))
    }

    async fn login(&self, email: &str, _password: &SecretString) -> Result<UserRecord, Error> {
        self.record(Call::Login(email.to_owned()), || ada(7))
    }

    async fn get_user(&self, id: UserId) -> Result<UserRecord, Error> {
        self.record(Call::GetUser(id), || ada(id))
    }

    async fn update_user(&self, id: UserId, _command: &UserCommand) -> Result<UserRecord, Error> {
        self.record(Call::UpdateUser(id), || ada(id))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.record(Call::DeleteUser(id), || ())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn utc(d: u32, h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, d, h, m, 0).unwrap()
}

/// The 09:00–10:00 slot on 2024-06-01 in Aurora.
pub fn morning_form() -> BookingForm {
    BookingForm::for_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).with_room(&aurora())
}

pub fn booking(id: BookingId, start: DateTime<Utc>, end: DateTime<Utc>) -> BookingRecord {
    BookingRecord {
        id,
        start_time: start,
        end_time: end,
        room_id: 3,
        room_name: "Aurora".into(),
        user_id: 7,
    }
}
