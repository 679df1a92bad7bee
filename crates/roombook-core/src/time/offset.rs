// ── UTC offset lookup ──
//
// The converter never asks the operating system for a zone on its own;
// whoever calls it injects an `OffsetProvider`. Providers are consulted
// per timestamp, so DST changes between two calls (or between the two
// ends of one range) are always observed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::TimeError;

/// Supplies the UTC offset in effect for a wall-clock time or an instant.
pub trait OffsetProvider {
    /// Offset in effect at the local wall-clock time `local`.
    ///
    /// Wall-clock times repeated by a DST fold resolve to the earlier
    /// instant; times skipped by a DST gap are an error.
    fn offset_at_local(&self, local: NaiveDateTime) -> Result<FixedOffset, TimeError>;

    /// Offset in effect at `instant`.
    fn offset_at_utc(&self, instant: DateTime<Utc>) -> FixedOffset;
}

/// Collapse chrono's local lookup result into one offset.
fn resolve_local<O: Offset>(
    local: NaiveDateTime,
    result: LocalResult<O>,
) -> Result<FixedOffset, TimeError> {
    match result {
        LocalResult::Single(offset) => Ok(offset.fix()),
        // The larger offset maps the wall-clock time onto the earlier instant.
        LocalResult::Ambiguous(a, b) => {
            let (a, b) = (a.fix(), b.fix());
            Ok(if a.local_minus_utc() >= b.local_minus_utc() {
                a
            } else {
                b
            })
        }
        LocalResult::None => Err(TimeError::NonexistentLocalTime { local }),
    }
}

impl OffsetProvider for FixedOffset {
    fn offset_at_local(&self, _local: NaiveDateTime) -> Result<FixedOffset, TimeError> {
        Ok(*self)
    }

    fn offset_at_utc(&self, _instant: DateTime<Utc>) -> FixedOffset {
        *self
    }
}

impl OffsetProvider for Utc {
    fn offset_at_local(&self, _local: NaiveDateTime) -> Result<FixedOffset, TimeError> {
        Ok(self.fix())
    }

    fn offset_at_utc(&self, _instant: DateTime<Utc>) -> FixedOffset {
        self.fix()
    }
}

/// The device's own zone, looked up fresh on every call.
impl OffsetProvider for Local {
    fn offset_at_local(&self, local: NaiveDateTime) -> Result<FixedOffset, TimeError> {
        resolve_local(local, self.offset_from_local_datetime(&local))
    }

    fn offset_at_utc(&self, instant: DateTime<Utc>) -> FixedOffset {
        self.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }
}

impl OffsetProvider for Tz {
    fn offset_at_local(&self, local: NaiveDateTime) -> Result<FixedOffset, TimeError> {
        resolve_local(local, self.offset_from_local_datetime(&local))
    }

    fn offset_at_utc(&self, instant: DateTime<Utc>) -> FixedOffset {
        self.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }
}

impl<P: OffsetProvider + ?Sized> OffsetProvider for &P {
    fn offset_at_local(&self, local: NaiveDateTime) -> Result<FixedOffset, TimeError> {
        (**self).offset_at_local(local)
    }

    fn offset_at_utc(&self, instant: DateTime<Utc>) -> FixedOffset {
        (**self).offset_at_utc(instant)
    }
}

// ── ZoneSetting ──────────────────────────────────────────────────────

/// A configurable time zone: the device zone, a fixed offset, or an
/// IANA zone.
///
/// Parses from `"local"`/`"system"`, `"UTC"`, `"+05:30"`-style offsets,
/// and IANA names such as `"America/New_York"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSetting {
    #[default]
    System,
    Fixed(FixedOffset),
    Named(Tz),
}

impl OffsetProvider for ZoneSetting {
    fn offset_at_local(&self, local: NaiveDateTime) -> Result<FixedOffset, TimeError> {
        match self {
            Self::System => Local.offset_at_local(local),
            Self::Fixed(offset) => offset.offset_at_local(local),
            Self::Named(tz) => tz.offset_at_local(local),
        }
    }

    fn offset_at_utc(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Self::System => Local.offset_at_utc(instant),
            Self::Fixed(offset) => offset.offset_at_utc(instant),
            Self::Named(tz) => tz.offset_at_utc(instant),
        }
    }
}

impl FromStr for ZoneSetting {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("local") || raw.eq_ignore_ascii_case("system") {
            return Ok(Self::System);
        }
        if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
            return Ok(Self::Fixed(Utc.fix()));
        }
        if let Ok(offset) = raw.parse::<FixedOffset>() {
            return Ok(Self::Fixed(offset));
        }
        raw.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| TimeError::UnknownZone { zone: raw.to_owned() })
    }
}

impl fmt::Display for ZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("local"),
            Self::Fixed(offset) if offset.local_minus_utc() == 0 => f.write_str("UTC"),
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl Serialize for ZoneSetting {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZoneSetting {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
