//! Driver for the Andivi ANDRTF3/MD wall-mount RS485 temperature sensor
//!
//! The sensor exposes one signed 16-bit input register (offset 50, read
//! with function code 0x04) holding the temperature in deci-degrees
//! Celsius (261 = 26.1 °C). This crate drives single-register reads over
//! an injected [`RegisterTransport`](andrtf3_core::RegisterTransport),
//! validates the raw value against the sensor's reserved fault codes and
//! physical range, debounces sentinel faults so transient glitches do not
//! flap the connectivity verdict, and can mirror the latest value into
//! caller-owned atomic slots.
//!
//! Retries, back-off and transport selection are the calling
//! coordinator's responsibility; the driver only reports outcomes.

#![no_std]
#![deny(unsafe_code)]

// Must come first so the log macros are in scope for the other modules.
#[macro_use]
mod fmt;

pub mod binding;
pub mod driver;

pub use binding::TemperatureBinding;
pub use driver::Andrtf3;
