//! Wall clock for the face
//!
//! A [`Clock`] keeps the last reading of a [`ClockSource`] shifted into a
//! fixed-offset [`TimeZone`]. It never advances on its own: the reading only
//! changes on [`Clock::set_to_now`] and [`Clock::clear`].

use chrono::{Datelike, Duration, FixedOffset, NaiveDateTime, Offset, Timelike, Utc};
use heapless::String;

use crate::{
    bounded,
    error::Error,
    fmt::{info, warn},
};

/// Maximum stored length of a zone identifier
pub const ZONE_ID_LEN: usize = 32;

/// Source of the current wall time
pub trait ClockSource {
    /// Current time in UTC
    fn now_utc(&self) -> NaiveDateTime;
}

impl<T: ClockSource + ?Sized> ClockSource for &T {
    fn now_utc(&self) -> NaiveDateTime {
        (**self).now_utc()
    }
}

/// Host system clock
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl ClockSource for SystemClock {
    fn now_utc(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Wall time split into the fields the face displays
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    /// Hour of the day (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// Day of the month (1-31)
    pub month_day: u32,
    /// Month, zero-based (0-11)
    pub month: u32,
    /// Calendar year
    pub year: i32,
}

impl ClockReading {
    /// All fields zero
    pub const ZERO: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        month_day: 0,
        month: 0,
        year: 0,
    };

    /// Split a local date and time into its fields
    pub fn from_datetime(time: &NaiveDateTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            month_day: time.day(),
            month: time.month0(),
            year: time.year(),
        }
    }
}

/// Fixed-offset time zone
///
/// Accepted identifiers: `UTC`, `GMT`, `Z`, the empty string, and numeric
/// offsets with an optional `UTC`/`GMT` prefix such as `+2`, `UTC+02:00`,
/// `GMT-0530`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZone {
    id: String<ZONE_ID_LEN>,
    offset: FixedOffset,
}

impl TimeZone {
    /// Coordinated Universal Time
    pub fn utc() -> Self {
        Self {
            id: bounded("UTC"),
            offset: Utc.fix(),
        }
    }

    /// Parse a zone identifier
    pub fn parse(id: &str) -> Result<Self, Error> {
        let trimmed = id.trim();
        if trimmed == "Z" {
            return Ok(Self::utc());
        }

        let offset_text = trimmed
            .strip_prefix("UTC")
            .or_else(|| trimmed.strip_prefix("GMT"))
            .unwrap_or(trimmed);
        if offset_text.is_empty() {
            return Ok(Self::utc());
        }

        let (sign, digits) = if let Some(rest) = offset_text.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = offset_text.strip_prefix('-') {
            (-1, rest)
        } else {
            return Err(Error::InvalidTimeZone);
        };
        if !digits.is_ascii() {
            return Err(Error::InvalidTimeZone);
        }

        let (hours, minutes) = match digits.split_once(':') {
            Some(parts) => parts,
            None if digits.len() > 2 => digits.split_at(digits.len() - 2),
            None => (digits, ""),
        };
        let hours = parse_field(hours)?;
        let minutes = if minutes.is_empty() {
            0
        } else if minutes.len() == 2 {
            parse_field(minutes)?
        } else {
            return Err(Error::InvalidTimeZone);
        };
        if minutes >= 60 {
            return Err(Error::InvalidTimeZone);
        }
        if hours > 23 {
            return Err(Error::OffsetOutOfRange);
        }

        let offset = FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
            .ok_or(Error::OffsetOutOfRange)?;

        Ok(Self {
            id: bounded(trimmed),
            offset,
        })
    }

    /// Identifier the zone was created from
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Offset from UTC in seconds, east positive
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

/// One or two ASCII digits
fn parse_field(field: &str) -> Result<i32, Error> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidTimeZone);
    }
    field.parse().map_err(|_| Error::InvalidTimeZone)
}

/// Clock reading in a time zone
pub struct Clock<C> {
    source: C,
    zone: TimeZone,
    reading: ClockReading,
}

impl<C: ClockSource> Clock<C> {
    /// New clock in UTC with a zeroed reading
    pub fn new(source: C) -> Self {
        Self {
            source,
            zone: TimeZone::utc(),
            reading: ClockReading::ZERO,
        }
    }

    /// Switch to another zone and zero the reading.
    ///
    /// Identifiers that do not parse fall back to UTC.
    pub fn clear(&mut self, zone_id: &str) {
        self.zone = match TimeZone::parse(zone_id) {
            Ok(zone) => {
                info!("Time zone set to {} ({} s)", zone.id(), zone.offset_seconds());
                zone
            }
            Err(err) => {
                warn!("Time zone {}: {}, using UTC", zone_id, err);
                TimeZone::utc()
            }
        };
        self.reading = ClockReading::ZERO;
    }

    /// Refresh the reading from the clock source
    pub fn set_to_now(&mut self) {
        let utc = self.source.now_utc();
        let local = utc
            .checked_add_signed(Duration::seconds(self.zone.offset_seconds().into()))
            .unwrap_or(utc);
        self.reading = ClockReading::from_datetime(&local);
    }

    /// Last reading
    pub fn reading(&self) -> &ClockReading {
        &self.reading
    }

    /// Current zone
    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// Underlying clock source
    pub fn source(&self) -> &C {
        &self.source
    }
}
