//! Error telemetry trait
//!
//! Fire-and-forget accounting of read outcomes per device address. The
//! driver reports into this sink but never reads anything back from it.

use crate::error::ErrorCategory;

/// External accounting sink for read outcomes
pub trait ErrorTelemetry {
    /// Record a failed attempt against a device address
    fn record_error(&mut self, address: u8, category: ErrorCategory);

    /// Record a successful read against a device address
    fn record_success(&mut self, address: u8);
}

/// Telemetry sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl ErrorTelemetry for NullTelemetry {
    fn record_error(&mut self, _address: u8, _category: ErrorCategory) {}

    fn record_success(&mut self, _address: u8) {}
}
