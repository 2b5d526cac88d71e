//! Collaborator abstraction traits
//!
//! These traits define the seams between the driver core and its external
//! collaborators: the register-oriented transport and the error telemetry
//! sink. Wire framing, CRC, queuing and scheduling live behind them.

pub mod telemetry;
pub mod transport;

pub use telemetry::{ErrorTelemetry, NullTelemetry};
pub use transport::{Priority, ReadStart, RegisterTransport, MAX_READ_REGISTERS};
