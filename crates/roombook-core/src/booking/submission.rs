// ── Booking submission ──
//
// One user action, one remote call. The id on the request picks create
// or update; the response (or its absence) is folded into a
// `SubmissionOutcome`. Nothing here retries or converts times.

use std::fmt;

use roombook_api::{BookingRecord, Error};
use tracing::{info, warn};

use super::BookingRequest;
use crate::service::BookingService;

/// Shown when the server reports a double booking (HTTP 409).
pub const CONFLICT_MESSAGE: &str = "This room is already booked for the selected time slot";

/// What happened to a submitted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A new booking was stored. The record is the server's copy.
    Created(BookingRecord),
    /// An existing booking was replaced.
    Updated(BookingRecord),
    /// Another booking already holds the room for that slot.
    Conflict(String),
    /// The server refused the request (4xx other than 409).
    ValidationRejected { status: u16, message: String },
    /// The server failed to process the request (5xx and anything else).
    ServerRejected { status: u16, message: String },
    /// No usable response: network failure, timeout, or an undecodable body.
    TransportFailure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated(_))
    }

    /// The stored booking, for successful submissions.
    pub fn record(&self) -> Option<&BookingRecord> {
        match self {
            Self::Created(record) | Self::Updated(record) => Some(record),
            _ => None,
        }
    }

    fn from_error(err: &Error) -> Self {
        let message = || {
            err.server_message()
                .map_or_else(|| err.to_string(), str::to_owned)
        };
        if err.is_transport() {
            return Self::TransportFailure(err.to_string());
        }
        match err.status() {
            Some(409) => Self::Conflict(CONFLICT_MESSAGE.to_owned()),
            Some(status @ 400..=499) => Self::ValidationRejected {
                status,
                message: message(),
            },
            Some(status) => Self::ServerRejected {
                status,
                message: message(),
            },
            None => Self::TransportFailure(err.to_string()),
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(record) => write!(f, "Booking {} created", record.id),
            Self::Updated(record) => write!(f, "Booking {} updated", record.id),
            Self::Conflict(message) | Self::TransportFailure(message) => f.write_str(message),
            Self::ValidationRejected { status, message }
            | Self::ServerRejected { status, message } => write!(f, "HTTP {status}: {message}"),
        }
    }
}

/// Send `request` to `service`: `update_booking` when it carries an id,
/// `create_booking` otherwise.
pub async fn submit<S: BookingService>(service: &S, request: &BookingRequest) -> SubmissionOutcome {
    let payload = request.to_payload();
    let result = match request.id() {
        Some(id) => service.update_booking(id, &payload).await.map(SubmissionOutcome::Updated),
        None => service.create_booking(&payload).await.map(SubmissionOutcome::Created),
    };

    match result {
        Ok(outcome) => {
            info!(room_id = request.room_id(), "{outcome}");
            outcome
        }
        Err(err) => {
            let outcome = SubmissionOutcome::from_error(&err);
            warn!(error = %err, "booking submission failed");
            outcome
        }
    }
}
