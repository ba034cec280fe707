//! ESP-IDF I2C master adapter.
//!
//! Uses the legacy `i2c_master_write_read_device` path (via
//! [`I2cDriver`]), which honours a per-call tick timeout.

use core::time::Duration;

use esp_idf_hal::delay::TickType;
use esp_idf_hal::i2c::I2cDriver;
use esp_idf_svc::sys::{EspError, ESP_ERR_TIMEOUT, ESP_FAIL};

use super::BusPort;
use crate::error::BusError;

pub struct EspI2cBus<'d> {
    driver: I2cDriver<'d>,
}

impl<'d> EspI2cBus<'d> {
    pub fn new(driver: I2cDriver<'d>) -> Self {
        Self { driver }
    }
}

/// ESP_FAIL is what the driver returns for a missing ACK; bus-busy and
/// lost-arbitration surface as ESP_ERR_INVALID_STATE.
fn map_esp_error(e: EspError) -> BusError {
    match e.code() {
        c if c == ESP_ERR_TIMEOUT as i32 => BusError::Timeout,
        c if c == ESP_FAIL => BusError::Nack,
        _ => BusError::Arbitration,
    }
}

impl BusPort for EspI2cBus<'_> {
    fn transact(
        &mut self,
        address: u8,
        write: &[u8],
        read: &mut [u8],
        timeout: Duration,
    ) -> Result<(), BusError> {
        let ticks = TickType::from(timeout).ticks();
        let result = match (write.is_empty(), read.is_empty()) {
            (false, false) => self.driver.write_read(address, write, read, ticks),
            (false, true) => self.driver.write(address, write, ticks),
            (true, false) => self.driver.read(address, read, ticks),
            (true, true) => return Ok(()),
        };
        result.map_err(map_esp_error)
    }
}
