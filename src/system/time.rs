//! Time keeping module for PineTime

use chrono::{DateTime, Duration, NaiveDateTime};
use embassy_time::Instant;
use pinetime_clockface::ClockSource;

pub struct TimeReference {
    /// Clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: NaiveDateTime::UNIX_EPOCH,
            instant: Instant::from_ticks(0),
        }
    }
}

impl TimeReference {
    /// Create new time reference from NaiveDateTime
    pub fn from_datetime(time: NaiveDateTime) -> Self {
        Self {
            time,
            instant: Instant::now(),
        }
    }

    /// Create new time reference from seconds since the Unix epoch
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(|utc| Self::from_datetime(utc.naive_utc()))
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init() -> Self {
        Self {
            reference: TimeReference::default(),
        }
    }

    /// Get current time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference
            .time
            .checked_add_signed(Duration::microseconds(elapsed.as_micros() as i64))
            .unwrap_or(self.reference.time)
    }

    /// Update time reference
    pub fn set_time(&mut self, reference: TimeReference) {
        defmt::info!("Clock set to {} s since epoch", reference.time.and_utc().timestamp());
        self.reference = reference;
    }
}

impl ClockSource for TimeManager {
    fn now_utc(&self) -> NaiveDateTime {
        self.get_time()
    }
}
