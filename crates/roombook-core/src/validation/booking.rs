// ── Booking form rules ──
//
// Every rule is checked and each failure reported, in this order:
//   1. a room is selected
//   2. the start time is before the end time
// Dates in the past are accepted.

use chrono::{NaiveDate, NaiveTime};
use roombook_api::{Room, RoomId};

use super::{ValidationFailed, ValidationOutcome};
use crate::time::LocalTimeRange;

pub const NO_ROOM_SELECTED: &str = "No room selected";
pub const END_BEFORE_START: &str = "End time must be after start time";

/// Raw values from a booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub room_id: Option<RoomId>,
    pub room_name: String,
}

impl BookingForm {
    /// An empty form for `date`, pre-filled with the default 09:00–10:00 slot.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN),
            room_id: None,
            room_name: String::new(),
        }
    }

    #[must_use]
    pub fn with_room(mut self, room: &Room) -> Self {
        self.room_id = Some(room.id);
        self.room_name.clone_from(&room.name);
        self
    }

    #[must_use]
    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start = start;
        self.end = end;
        self
    }
}

/// A booking form that passed validation. Times are still local.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBooking {
    pub range: LocalTimeRange,
    pub room_id: RoomId,
    pub room_name: String,
}

pub fn validate(form: &BookingForm) -> ValidationOutcome<NormalizedBooking> {
    let mut messages = Vec::new();
    if form.room_id.is_none() {
        messages.push(NO_ROOM_SELECTED.to_owned());
    }
    let range = LocalTimeRange::new(form.date, form.start, form.end);
    if range.is_err() {
        messages.push(END_BEFORE_START.to_owned());
    }

    match (form.room_id, range) {
        (Some(room_id), Ok(range)) => Ok(NormalizedBooking {
            range,
            room_id,
            room_name: form.room_name.clone(),
        }),
        _ => Err(ValidationFailed::new(messages)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn aurora() -> Room {
        Room {
            id: 3,
            name: "Aurora".into(),
            capacity: 8,
        }
    }

    fn form() -> BookingForm {
        BookingForm::for_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn new_form_defaults_to_nine_to_ten() {
        let form = form();
        assert_eq!(form.start, hm(9, 0));
        assert_eq!(form.end, hm(10, 0));
        assert_eq!(form.room_id, None);
    }

    #[test]
    fn missing_room_is_reported() {
        let err = validate(&form()).unwrap_err();
        assert_eq!(err.messages(), [NO_ROOM_SELECTED]);
    }

    #[test]
    fn every_broken_rule_is_reported_in_order() {
        let err = validate(&form().with_times(hm(11, 0), hm(10, 0))).unwrap_err();
        assert_eq!(err.messages(), [NO_ROOM_SELECTED, END_BEFORE_START]);
    }

    #[test]
    fn inverted_times_are_reported_without_a_room() {
        let err = validate(&form().with_times(hm(10, 0), hm(10, 0))).unwrap_err();
        assert!(err.messages().iter().any(|m| m == END_BEFORE_START));
    }

    #[test]
    fn equal_or_inverted_times_are_rejected() {
        for (start, end) in [(hm(10, 0), hm(10, 0)), (hm(11, 0), hm(10, 0))] {
            let err = validate(&form().with_room(&aurora()).with_times(start, end)).unwrap_err();
            assert_eq!(err.first(), Some(END_BEFORE_START));
        }
    }

    #[test]
    fn past_dates_are_accepted() {
        let old = BookingForm::for_date(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()).with_room(&aurora());
        assert!(validate(&old).is_ok());
    }

    #[test]
    fn valid_form_is_normalized() {
        let booking = validate(&form().with_room(&aurora())).unwrap();
        assert_eq!(booking.room_id, 3);
        assert_eq!(booking.room_name, "Aurora");
        assert_eq!(booking.range.start, hm(9, 0));
        assert_eq!(booking.range.end, hm(10, 0));
    }
}
