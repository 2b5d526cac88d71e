//! Transport error taxonomy
//!
//! Failure codes reported by the register transport, plus the coarse
//! categories used for external error accounting.

/// Failure codes a register transport can report
///
/// These cover both Modbus exception responses (illegal function/address/
/// value, device failure) and local transport conditions (timeout, CRC,
/// queue state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// No response within the configured timeout
    Timeout,
    /// Response frame failed its CRC check
    CrcMismatch,
    /// Modbus exception 0x01
    IllegalFunction,
    /// Modbus exception 0x02
    IllegalDataAddress,
    /// Modbus exception 0x03
    IllegalDataValue,
    /// Modbus exception 0x04
    DeviceFailure,
    /// Response was well-framed but made no sense for the request
    InvalidResponse,
    /// Transport request queue is full
    QueueFull,
    /// Transport has not been initialized
    NotInitialized,
    /// Lower-level communication error (serial, bus)
    CommunicationError,
    /// Request parameters rejected by the transport
    InvalidParameter,
}

impl TransportError {
    /// Stable human-readable classification, used verbatim in reading
    /// snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "Timeout",
            Self::CrcMismatch => "CRC error",
            Self::IllegalFunction => "Illegal function",
            Self::IllegalDataAddress => "Illegal data address",
            Self::IllegalDataValue => "Illegal data value",
            Self::DeviceFailure => "Slave device failure",
            Self::InvalidResponse => "Invalid response",
            Self::QueueFull => "Queue full",
            Self::NotInitialized => "Not initialized",
            Self::CommunicationError => "Communication error",
            Self::InvalidParameter => "Invalid parameter",
        }
    }
}

/// Coarse error category for external telemetry accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCategory {
    /// Transport-level failure (timeout, CRC, exception response)
    Transport,
    /// Response decoded but unusable (short payload, out of range)
    Data,
    /// Reserved fault code in the register value (0x0000 / 0xFFFF)
    Sentinel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_strings() {
        assert_eq!(TransportError::Timeout.as_str(), "Timeout");
        assert_eq!(TransportError::CrcMismatch.as_str(), "CRC error");
        assert_eq!(
            TransportError::DeviceFailure.as_str(),
            "Slave device failure"
        );
    }
}
