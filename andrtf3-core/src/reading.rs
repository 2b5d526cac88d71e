//! Temperature reading snapshot
//!
//! Callers always receive a copy of the snapshot, never a live reference,
//! so a reading taken while the driver is mid-update cannot tear.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of the most recent read attempt
///
/// Temperature is fixed-point with 0.1 °C resolution (261 = 26.1 °C).
///
/// `celsius_x10` holds the value from the last *successful* decode: failed
/// attempts mark the snapshot invalid and record a reason, but never
/// overwrite the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureReading {
    /// Temperature in 0.1 °C units
    pub celsius_x10: i16,
    /// Time of the last successful decode (milliseconds, wrapping)
    pub timestamp_ms: u32,
    /// Whether the last attempt produced a usable value
    pub valid: bool,
    /// Classified failure reason, empty when valid
    #[cfg_attr(feature = "serde", serde(skip))]
    pub error: &'static str,
}

impl Default for TemperatureReading {
    fn default() -> Self {
        Self {
            celsius_x10: 0,
            timestamp_ms: 0,
            valid: false,
            error: "",
        }
    }
}

impl TemperatureReading {
    /// Temperature in whole degrees Celsius (truncated toward zero)
    pub fn celsius_whole(&self) -> i16 {
        self.celsius_x10 / 10
    }

    /// Record a successful decode
    pub fn accept(&mut self, celsius_x10: i16, now_ms: u32) {
        self.celsius_x10 = celsius_x10;
        self.timestamp_ms = now_ms;
        self.valid = true;
        self.error = "";
    }

    /// Record a failed attempt, keeping the previous value
    pub fn reject(&mut self, error: &'static str) {
        self.valid = false;
        self.error = error;
    }
}
