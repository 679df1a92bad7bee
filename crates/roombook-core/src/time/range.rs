use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::TimeError;

// ── LocalTimeRange ───────────────────────────────────────────────────

/// A booking slot as the user sees it: one calendar date, a start and an
/// end wall-clock time, in whatever zone the caller works in.
///
/// A well-formed range has `start < end`. The fields stay public so forms
/// can be assembled piecemeal; [`LocalTimeRange::new`] and every
/// conversion check the ordering and never correct it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalTimeRange {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl LocalTimeRange {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<Self, TimeError> {
        let range = Self { date, start, end };
        range.check()?;
        Ok(range)
    }

    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    pub fn end_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.end)
    }

    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    pub(crate) fn check(&self) -> Result<(), TimeError> {
        if self.is_ordered() {
            Ok(())
        } else {
            Err(TimeError::MalformedRange {
                start: self.start_datetime(),
                end: self.end_datetime(),
            })
        }
    }
}

// ── UtcTimeRange ─────────────────────────────────────────────────────

/// Canonical form of a booking slot: two UTC instants, start strictly
/// before end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcTimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl UtcTimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(TimeError::MalformedRange {
                start: start.naive_utc(),
                end: end.naive_utc(),
            })
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
