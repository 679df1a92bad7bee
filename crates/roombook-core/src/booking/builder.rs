// The only place a submission converts local times to UTC. Everything
// downstream (the workflow, the API client) treats times as UTC already.

use roombook_api::{BookingId, UserId};
use tracing::debug;

use super::BookingRequest;
use crate::time::{self, OffsetProvider, TimeError};
use crate::validation::NormalizedBooking;

/// Builds [`BookingRequest`]s in a given zone.
#[derive(Debug, Clone, Copy)]
pub struct BookingRequestBuilder<'z, P: OffsetProvider> {
    zone: &'z P,
}

impl<'z, P: OffsetProvider> BookingRequestBuilder<'z, P> {
    pub fn new(zone: &'z P) -> Self {
        Self { zone }
    }

    /// Convert `booking` to UTC and attach the owner and, for an edit,
    /// the id of the booking being replaced.
    pub fn build(
        &self,
        booking: NormalizedBooking,
        user_id: UserId,
        existing: Option<BookingId>,
    ) -> Result<BookingRequest, TimeError> {
        let range = time::to_utc(&booking.range, self.zone)?;
        debug!(
            start = %range.start(),
            end = %range.end(),
            room_id = booking.room_id,
            update = existing.is_some(),
            "built booking request"
        );
        Ok(BookingRequest::new(
            existing,
            range,
            booking.room_id,
            booking.room_name,
            user_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::time::LocalTimeRange;

    fn morning() -> NormalizedBooking {
        NormalizedBooking {
            range: LocalTimeRange::new(
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            )
            .unwrap(),
            room_id: 3,
            room_name: "Aurora".into(),
        }
    }

    #[test]
    fn new_booking_has_no_id_and_utc_times() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let request = BookingRequestBuilder::new(&zone).build(morning(), 7, None).unwrap();

        assert_eq!(request.id(), None);
        assert_eq!(request.user_id(), 7);
        assert_eq!(request.range().start(), Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap());
        assert_eq!(request.range().end(), Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap());
    }

    #[test]
    fn edit_keeps_existing_id() {
        let request = BookingRequestBuilder::new(&Utc).build(morning(), 7, Some(42)).unwrap();
        assert_eq!(request.id(), Some(42));
        assert_eq!(request.room_name(), "Aurora");
    }
}
