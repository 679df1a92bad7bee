//! Booking workflows between `roombook-api` and the presentation layer.
//!
//! A booking travels through these stages, one per module:
//!
//! - **[`validation`]**: raw form values → [`NormalizedBooking`] or
//!   [`RegistrationRequest`], or the messages explaining why not.
//! - **[`time`]**: local date + wall-clock range ↔ UTC range, with the zone
//!   injected as an [`OffsetProvider`].
//! - **[`booking`]**: [`BookingRequestBuilder`] converts once to UTC, then
//!   [`submit`](booking::submit) makes exactly one call and returns a
//!   [`SubmissionOutcome`] (created, updated, conflict, rejected, or
//!   transport failure).
//!
//! **[`Reservations`]** ties the stages together over any
//! [`BookingService`]; in production that is `roombook_api::ApiClient`.

pub mod account;
pub mod booking;
pub mod config;
pub mod convert;
pub mod error;
pub mod reservations;
pub mod service;
pub mod time;
pub mod validation;

// ── Primary re-exports ──────────────────────────────────────────────
pub use account::{LoginOutcome, RegistrationOutcome};
pub use booking::{BookingRequest, BookingRequestBuilder, SubmissionOutcome};
pub use config::{ClientConfig, ServiceCredentials, TlsVerification};
pub use convert::LocalBooking;
pub use error::CoreError;
pub use reservations::Reservations;
pub use service::BookingService;
pub use time::{LocalTimeRange, OffsetProvider, TimeError, UtcTimeRange, ZoneSetting};
pub use validation::{
    BookingForm, NormalizedBooking, RegistrationForm, RegistrationRequest, ValidationFailed,
    ValidationOutcome,
};

// Wire types callers need alongside the workflows.
pub use roombook_api::{BookingId, BookingRecord, Room, RoomId, UserId, UserRecord};
