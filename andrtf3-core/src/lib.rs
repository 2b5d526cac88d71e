//! Board-agnostic core logic for the ANDRTF3 temperature sensor driver
//!
//! This crate contains everything that does not depend on a concrete
//! Modbus transport:
//!
//! - Collaborator traits (register transport, error telemetry)
//! - Sensor configuration types
//! - Reading snapshot type
//! - Raw register classification (sentinel codes, range check)
//! - Link monitor (consecutive-sentinel debounce)
//! - Transport error taxonomy

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod decode;
pub mod error;
pub mod link;
pub mod reading;
pub mod traits;

pub use config::SensorConfig;
pub use decode::{classify_raw, RawSample};
pub use error::{ErrorCategory, TransportError};
pub use link::LinkMonitor;
pub use reading::TemperatureReading;
pub use traits::{
    ErrorTelemetry, NullTelemetry, Priority, ReadStart, RegisterTransport, MAX_READ_REGISTERS,
};
