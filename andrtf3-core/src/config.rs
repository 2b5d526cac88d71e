//! Sensor configuration
//!
//! The configuration is immutable for the duration of a read cycle and
//! may be replaced by the caller between cycles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest valid Modbus server address
pub const MODBUS_ADDRESS_MIN: u8 = 1;

/// Highest valid Modbus server address
pub const MODBUS_ADDRESS_MAX: u8 = 247;

/// ANDRTF3 sensor configuration
///
/// Defaults match the sensor's factory setup: address 3, 200 ms response
/// timeout. `retries` is advisory information for the calling coordinator;
/// the driver itself never retries a failed read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// Modbus server address (1-247)
    pub address: u8,
    /// Response timeout in milliseconds
    pub timeout_ms: u16,
    /// Suggested retry count for the calling coordinator (not enforced here)
    pub retries: u8,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            address: 3,
            timeout_ms: 200,
            retries: 3,
        }
    }
}

impl SensorConfig {
    /// Create a configuration with a non-default server address
    pub fn with_address(address: u8) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// Check that the address is a valid Modbus server address and the
    /// timeout is non-zero
    pub fn is_valid(&self) -> bool {
        (MODBUS_ADDRESS_MIN..=MODBUS_ADDRESS_MAX).contains(&self.address) && self.timeout_ms > 0
    }
}
