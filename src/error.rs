//! Unified error types for the Drybox firmware.
//!
//! Three layers, leaf-first: [`BusError`] from the two-wire transport,
//! [`DriverError`] from the device drivers, and the top-level [`Error`]
//! the control loop returns.  All variants are `Copy` so they can be
//! carried inside events and logged without allocation.

use core::fmt;

use embedded_hal::i2c::ErrorKind;

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Failure of a single addressed bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The addressed device (or a data byte) was not acknowledged.
    Nack,
    /// The transfer did not complete within the transaction timeout.
    Timeout,
    /// Another master or a line fault took the bus mid-transfer.
    Arbitration,
}

impl BusError {
    /// Map an `embedded-hal` error kind onto the three transport failures.
    ///
    /// `embedded-hal` has no timeout kind; HALs report a stalled transfer
    /// as `Other` or `Overrun`.
    pub fn from_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(_) => Self::Nack,
            ErrorKind::ArbitrationLoss | ErrorKind::Bus => Self::Arbitration,
            _ => Self::Timeout,
        }
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nack => write!(f, "NACK"),
            Self::Timeout => write!(f, "timeout"),
            Self::Arbitration => write!(f, "arbitration lost"),
        }
    }
}

// ---------------------------------------------------------------------------
// Driver errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The underlying bus transaction failed.
    BusFailure(BusError),
    /// A sensor data word did not match its CRC-8.
    ChecksumMismatch,
    /// A calendar field was outside its valid range.
    InvalidTime,
    /// A digital output could not be driven to the commanded level.
    PinWrite,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BusFailure(e) => write!(f, "bus failure: {e}"),
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::InvalidTime => write!(f, "invalid calendar time"),
            Self::PinWrite => write!(f, "output pin write failed"),
        }
    }
}

impl From<BusError> for DriverError {
    fn from(e: BusError) -> Self {
        Self::BusFailure(e)
    }
}

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible control-loop operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The real-time clock could not be read.  Fatal under
    /// [`RtcFaultPolicy::Abort`](crate::config::RtcFaultPolicy::Abort).
    Clock(DriverError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clock(e) => write!(f, "clock: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
