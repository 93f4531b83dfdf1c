//! Battery label
//!
//! The face only shows a string. The helpers here turn a PineTime SAADC
//! sample into that string; see https://wiki.pine64.org/wiki/PineTime for the
//! voltage divider.

use core::fmt::Write;

use heapless::String;

use crate::{bounded, error::Error};

/// Maximum stored length of a battery label
pub const BATTERY_LABEL_LEN: usize = 16;

/// Short text shown under the date, e.g. `"87%"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryLabel(String<BATTERY_LABEL_LEN>);

impl BatteryLabel {
    /// Label with the given text, cut to [`BATTERY_LABEL_LEN`] bytes
    pub fn new(text: &str) -> Self {
        Self(bounded(text))
    }

    /// Label reading `"<percent>%"`
    pub fn from_percent(percent: u8) -> Self {
        let mut text = String::new();
        // "100%" always fits
        let _ = write!(text, "{}%", percent.min(100));
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BatteryLabel {
    fn default() -> Self {
        Self::new("100%")
    }
}

/// Convert a 12 bit ADC sample into the battery voltage in millivolts.
pub fn millivolts_from_adc(raw: i16) -> Result<u16, Error> {
    match raw {
        0..=4095 => {
            // Multiply by 2 * 1000 for mV, divide by 2^12 / 3.3 V reference.
            // u32 during calculation to prevent overflow
            Ok((raw as u32 * 2000 / 1241) as u16)
        }
        _ => Err(Error::InvalidMeasurement),
    }
}

/// Estimate the remaining capacity from the battery voltage.
///
/// Fixed data points with linear interpolation in between.
pub fn percent_from_millivolts(millivolts: u16) -> u8 {
    (match millivolts {
        0..=3449 => 0,
        3450..=3699 => (millivolts - 3450) / 5,
        3700..=4199 => 50 + (millivolts - 3700) / 10,
        _ => 100,
    }) as u8
}
