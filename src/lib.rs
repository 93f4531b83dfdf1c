//! Digital clock face for the PineTime
//!
//! The face draws the current time, the date, a battery label and a sweeping
//! seconds hand onto anything implementing [`ui::Surface`]. Drawing onto an
//! `embedded-graphics` target goes through [`ui::CanvasSurface`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt;

pub mod battery;
pub mod clock;
pub mod config;
pub mod error;
pub mod ui;

pub use battery::BatteryLabel;
pub use clock::{Clock, ClockReading, ClockSource, TimeZone};
pub use config::{FaceConfig, Theme};
pub use error::Error;
pub use ui::{Bounds, CanvasSurface, Color, FaceRenderer, Style, Surface, WatchFace};

/// Copy `text` into a bounded string, cutting at the last char boundary
/// that fits.
pub(crate) fn bounded<const N: usize>(text: &str) -> heapless::String<N> {
    let mut end = text.len().min(N);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = heapless::String::new();
    // Cannot fail, `end <= N`
    let _ = out.push_str(&text[..end]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_keeps_short_text() {
        let s: heapless::String<8> = bounded("42%");
        assert_eq!(s.as_str(), "42%");
    }

    #[test]
    fn test_bounded_cuts_on_char_boundary() {
        // 'é' is two bytes and straddles the limit
        let s: heapless::String<4> = bounded("abcé");
        assert_eq!(s.as_str(), "abc");
    }
}
