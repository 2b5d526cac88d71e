//! Register transport trait
//!
//! The driver issues single-register input reads through this seam. The
//! implementation owns the Modbus RTU framing, CRC, serial port and any
//! request queue; the driver only sees register words or a classified
//! error.

use heapless::Vec;

use crate::error::TransportError;

/// Capacity of the register buffer returned by a read
///
/// This driver only ever asks for one register, but transports batch up
/// to a small handful.
pub const MAX_READ_REGISTERS: usize = 4;

/// Request priority class, passed through to the transport's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Priority {
    /// Sensor data (safety-relevant, scheduled ahead of housekeeping)
    Sensor,
    /// Normal traffic
    Normal,
    /// Background traffic
    Low,
}

/// Outcome of issuing a non-blocking read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadStart {
    /// The transport resolved the read within the call
    Immediate(Vec<u16, MAX_READ_REGISTERS>),
    /// The response will arrive later as a pushed frame
    Deferred,
}

/// A register-oriented Modbus transport
pub trait RegisterTransport {
    /// Blocking input-register fetch (function code 0x04)
    ///
    /// Blocks for at most the transport's own response timeout.
    fn read_registers(
        &mut self,
        address: u8,
        register: u16,
        count: u16,
        priority: Priority,
    ) -> Result<Vec<u16, MAX_READ_REGISTERS>, TransportError>;

    /// Issue an input-register fetch without blocking
    ///
    /// Push-based transports queue the request and deliver the response
    /// as a frame; synchronous transports resolve within the call. The
    /// default implementation performs a blocking read and reports it as
    /// [`ReadStart::Immediate`].
    fn start_read(
        &mut self,
        address: u8,
        register: u16,
        count: u16,
        priority: Priority,
    ) -> Result<ReadStart, TransportError> {
        self.read_registers(address, register, count, priority)
            .map(ReadStart::Immediate)
    }
}
