//! Local ↔ UTC conversion of booking time ranges.
//!
//! Bookings are entered as a calendar date plus a start and end wall-clock
//! time in the user's zone ([`LocalTimeRange`]) and stored by the service
//! as UTC instants ([`UtcTimeRange`]). The zone is never read implicitly:
//! every conversion takes an [`OffsetProvider`].

mod convert;
mod offset;
mod range;

use chrono::NaiveDateTime;
use thiserror::Error;

pub use convert::{instant_to_local, to_local, to_utc};
pub use offset::{OffsetProvider, ZoneSetting};
pub use range::{LocalTimeRange, UtcTimeRange};

/// Failures of time range construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The start is not strictly before the end, or the two ends do not
    /// fall on the same local date.
    #[error("Malformed time range: {start} to {end}")]
    MalformedRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// The wall-clock time is skipped by a DST transition.
    #[error("Local time {local} does not exist in the selected time zone")]
    NonexistentLocalTime { local: NaiveDateTime },

    #[error("Unknown time zone: {zone}")]
    UnknownZone { zone: String },
}
