//! Battery status check
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{
    gpio::{AnyPin, Input},
    saadc::Saadc,
};
use pinetime_clockface::battery::{millivolts_from_adc, percent_from_millivolts};

pub struct BatteryStatus {
    /// Pin P0.12: High = battery, Low = charging
    pin_charge_indication: Input<'static, AnyPin>,

    /// Saadc instance
    saadc: Saadc<'static, 1>,

    /// Charging state
    charging: bool,

    /// Estimated capacity in percent
    percent: u8,
}

impl BatteryStatus {
    /// Initialize battery status
    pub async fn init(pin_charge_indication: Input<'static, AnyPin>, saadc: Saadc<'static, 1>) -> Self {
        let mut status = Self {
            charging: pin_charge_indication.is_low(),
            pin_charge_indication,
            saadc,
            percent: 0,
        };
        status.percent = status.sample_percent().await.unwrap_or(0);
        status
    }

    /// Return whether the watch is currently charging.
    ///
    /// This returns the stored value. To fetch current data, call `update()` first.
    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Return the current battery charge in percent (0–100).
    ///
    /// This returns the stored value. To fetch current data, call `update()` first.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Update the current battery status by reading information from the
    /// hardware. Return whether or not the values changed.
    pub async fn update(&mut self) -> bool {
        let mut changed = false;

        // Check charging status
        let charging = self.pin_charge_indication.is_low();
        if charging != self.charging {
            self.charging = charging;
            changed = true;
        }

        // Check capacity, keep the last value on a bad sample
        if let Some(percent) = self.sample_percent().await {
            if percent != self.percent {
                self.percent = percent;
                changed = true;
            }
        }

        changed
    }

    async fn sample_percent(&mut self) -> Option<u8> {
        let mut buf = [0; 1];
        self.saadc.sample(&mut buf).await;
        match millivolts_from_adc(buf[0]) {
            Ok(millivolts) => Some(percent_from_millivolts(millivolts)),
            Err(err) => {
                defmt::warn!("Battery sample {}: {}", buf[0], err);
                None
            }
        }
    }
}
