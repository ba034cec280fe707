//! Two-wire bus transaction port.
//!
//! Both device drivers talk to hardware exclusively through [`BusPort`]:
//! one call is one complete addressed write-then-read, so drivers never
//! hold the bus across unrelated operations.
//!
//! ```text
//!   Ds1307 ──┐
//!            ├──▶ BusPort::transact ──▶ HalBus<I2C>   (any embedded-hal I2C)
//!   Sht30  ──┘                      └─▶ EspI2cBus     (ESP-IDF driver, on target)
//! ```

#[cfg(feature = "espidf")]
pub mod esp;

use core::time::Duration;

use embedded_hal::i2c::{Error as _, I2c};

use crate::error::BusError;

/// Addressed write-then-read transactions with a per-call timeout.
pub trait BusPort {
    /// Write `write` (may be empty) to `address`, then read exactly
    /// `read.len()` bytes back (may be zero) as a single bus-level unit.
    fn transact(
        &mut self,
        address: u8,
        write: &[u8],
        read: &mut [u8],
        timeout: Duration,
    ) -> Result<(), BusError>;
}

impl<T: BusPort + ?Sized> BusPort for &mut T {
    fn transact(
        &mut self,
        address: u8,
        write: &[u8],
        read: &mut [u8],
        timeout: Duration,
    ) -> Result<(), BusError> {
        (**self).transact(address, write, read, timeout)
    }
}

/// [`BusPort`] over any `embedded-hal` 1.0 I2C controller.
///
/// `embedded-hal` has no per-transfer timeout, so `timeout` is left to the
/// HAL's own bus configuration.
pub struct HalBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped controller.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> BusPort for HalBus<I2C> {
    fn transact(
        &mut self,
        address: u8,
        write: &[u8],
        read: &mut [u8],
        _timeout: Duration,
    ) -> Result<(), BusError> {
        let result = match (write.is_empty(), read.is_empty()) {
            (false, false) => self.i2c.write_read(address, write, read),
            (false, true) => self.i2c.write(address, write),
            (true, false) => self.i2c.read(address, read),
            (true, true) => return Ok(()),
        };
        result.map_err(|e| BusError::from_kind(e.kind()))
    }
}
