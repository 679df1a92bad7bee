// ── Stored bookings in the caller's zone ──
//
// The service hands back UTC records; these helpers project them into the
// user's zone for listing and for pre-filling an edit form.

use chrono::NaiveDateTime;
use roombook_api::{BookingId, BookingRecord, RoomId, UserId};
use serde::Serialize;

use crate::time::{self, OffsetProvider, TimeError, UtcTimeRange};
use crate::validation::BookingForm;

/// A stored booking with its times shown in a local zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBooking {
    pub id: BookingId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub room_id: RoomId,
    pub room_name: String,
    pub user_id: UserId,
}

impl LocalBooking {
    pub fn from_record<P: OffsetProvider>(record: &BookingRecord, zone: &P) -> Self {
        Self {
            id: record.id,
            start: time::instant_to_local(record.start_time, zone),
            end: time::instant_to_local(record.end_time, zone),
            room_id: record.room_id,
            room_name: record.room_name.clone(),
            user_id: record.user_id,
        }
    }
}

/// An edit form holding the current values of `record`.
///
/// Fails if the stored slot does not fit on one local date.
pub fn prefill_form<P: OffsetProvider>(
    record: &BookingRecord,
    zone: &P,
) -> Result<BookingForm, TimeError> {
    let range = time::to_local(&UtcTimeRange::new(record.start_time, record.end_time)?, zone)?;
    Ok(BookingForm {
        date: range.date,
        start: range.start,
        end: range.end,
        room_id: Some(record.room_id),
        room_name: record.room_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn record() -> BookingRecord {
        BookingRecord {
            id: 42,
            start_time: Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap(),
            room_id: 3,
            room_name: "Aurora".into(),
            user_id: 7,
        }
    }

    #[test]
    fn local_booking_shows_zone_times() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = LocalBooking::from_record(&record(), &zone);
        assert_eq!(local.start.time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(local.end.time(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn prefill_recovers_the_original_form() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let form = prefill_form(&record(), &zone).unwrap();
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(form.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(form.room_id, Some(3));
    }
}
