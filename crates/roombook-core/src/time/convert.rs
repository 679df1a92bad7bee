// ── Range conversion ──
//
// Each endpoint gets its own offset lookup, so a range that straddles a
// DST transition converts correctly.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use super::{LocalTimeRange, OffsetProvider, TimeError, UtcTimeRange};

fn local_to_instant<P: OffsetProvider>(
    local: NaiveDateTime,
    zone: &P,
) -> Result<DateTime<Utc>, TimeError> {
    let offset = zone.offset_at_local(local)?;
    offset
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(TimeError::NonexistentLocalTime { local })
}

/// Wall-clock time in `zone` at `instant`.
pub fn instant_to_local<P: OffsetProvider>(instant: DateTime<Utc>, zone: &P) -> NaiveDateTime {
    instant
        .with_timezone(&zone.offset_at_utc(instant))
        .naive_local()
}

/// Convert a local booking range to UTC.
pub fn to_utc<P: OffsetProvider>(
    range: &LocalTimeRange,
    zone: &P,
) -> Result<UtcTimeRange, TimeError> {
    range.check()?;
    let start = local_to_instant(range.start_datetime(), zone)?;
    let end = local_to_instant(range.end_datetime(), zone)?;
    UtcTimeRange::new(start, end)
}

/// Convert a stored UTC range back to the caller's zone.
///
/// Fails with [`TimeError::MalformedRange`] if the two instants land on
/// different local dates, since a [`LocalTimeRange`] holds a single date.
pub fn to_local<P: OffsetProvider>(
    range: &UtcTimeRange,
    zone: &P,
) -> Result<LocalTimeRange, TimeError> {
    let start = instant_to_local(range.start(), zone);
    let end = instant_to_local(range.end(), zone);
    if start.date() != end.date() || start >= end {
        return Err(TimeError::MalformedRange { start, end });
    }
    Ok(LocalTimeRange {
        date: start.date(),
        start: start.time(),
        end: end.time(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{FixedOffset, NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn june_first(start: NaiveTime, end: NaiveTime) -> LocalTimeRange {
        LocalTimeRange::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), start, end).unwrap()
    }

    #[test]
    fn utc_minus_five_morning_slot() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let utc = to_utc(&june_first(hm(9, 0), hm(10, 0)), &zone).unwrap();

        assert_eq!(utc.start(), Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap());
        assert_eq!(utc.end(), Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap());
    }

    #[test]
    fn round_trips_for_every_fixed_offset() {
        let local = june_first(hm(9, 0), hm(10, 30));
        // -12:00 through +14:00 in half-hour steps.
        for half_hours in -24..=28 {
            let zone = FixedOffset::east_opt(half_hours * 1800).unwrap();
            let utc = to_utc(&local, &zone).unwrap();
            assert_eq!(to_local(&utc, &zone).unwrap(), local, "offset {zone}");
        }
    }

    #[test]
    fn inverted_range_is_rejected_not_swapped() {
        let bad = LocalTimeRange {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start: hm(10, 0),
            end: hm(9, 0),
        };
        let err = to_utc(&bad, &Utc).unwrap_err();
        assert!(matches!(err, TimeError::MalformedRange { .. }));
    }

    #[test]
    fn to_local_rejects_ranges_crossing_midnight() {
        let zone = FixedOffset::east_opt(9 * 3600).unwrap();
        let utc = UtcTimeRange::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 15, 30, 0).unwrap(),
        )
        .unwrap();
        // 23:00 → 00:30 the next day in UTC+09:00.
        assert!(matches!(
            to_local(&utc, &zone),
            Err(TimeError::MalformedRange { .. })
        ));
    }

    #[test]
    fn dst_offsets_are_looked_up_per_endpoint() {
        let ny = chrono_tz::America::New_York;
        let fall_back = LocalTimeRange::new(
            NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
            hm(0, 30),
            hm(3, 0),
        )
        .unwrap();
        let utc = to_utc(&fall_back, &ny).unwrap();
        // 00:30 EDT and 03:00 EST: three and a half real hours.
        assert_eq!(utc.start(), Utc.with_ymd_and_hms(2024, 11, 3, 4, 30, 0).unwrap());
        assert_eq!(utc.end(), Utc.with_ymd_and_hms(2024, 11, 3, 8, 0, 0).unwrap());
        assert_eq!(to_local(&utc, &ny).unwrap(), fall_back);
    }

    #[test]
    fn spring_forward_gap_fails_conversion() {
        let ny = chrono_tz::America::New_York;
        let gap = LocalTimeRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            hm(2, 15),
            hm(4, 0),
        )
        .unwrap();
        assert!(matches!(
            to_utc(&gap, &ny),
            Err(TimeError::NonexistentLocalTime { .. })
        ));
    }

    #[test]
    fn instant_to_local_applies_offset() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = instant_to_local(Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(), &zone);
        assert_eq!(local.time(), hm(16, 0));
    }
}
