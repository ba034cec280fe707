//! SHT30 temperature / humidity sensor driver.
//!
//! A single-shot measurement is one write-then-read: the two-byte trigger
//! command (high repeatability, clock stretching) followed by a six-byte
//! response `[T_msb, T_lsb, T_crc, RH_msb, RH_lsb, RH_crc]`.  With clock
//! stretching the sensor holds SCL until the conversion is done, so no
//! separate wait is needed.

use core::time::Duration;

use crate::bus::BusPort;
use crate::error::DriverError;

/// 7-bit bus address with ADDR pin low.
pub const SHT30_ADDR: u8 = 0x44;

/// Single shot, high repeatability, clock stretching enabled.
pub const CMD_MEASURE_HIGH_STRETCH: [u8; 2] = [0x2C, 0x06];

const FRAME_LEN: usize = 6;
const CRC_POLY: u8 = 0x31;
const CRC_INIT: u8 = 0xFF;

/// One decoded measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub raw_temperature: u16,
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// Datasheet transfer function: `T = -45 + 175 * raw / (2^16 - 1)`.
pub fn celsius_from_raw(raw: u16) -> f32 {
    -45.0 + 175.0 * (f32::from(raw) / 65_535.0)
}

/// Datasheet transfer function: `RH = 100 * raw / (2^16 - 1)`.
pub fn humidity_from_raw(raw: u16) -> f32 {
    100.0 * (f32::from(raw) / 65_535.0)
}

/// Sensirion CRC-8 (poly 0x31, init 0xFF, no reflection, no final XOR).
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = CRC_INIT;
    for byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC_POLY
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Decode a raw response frame, optionally checking both word CRCs.
pub fn decode_frame(frame: &[u8; FRAME_LEN], validate_crc: bool) -> Result<Measurement, DriverError> {
    if validate_crc && (crc8(&frame[0..2]) != frame[2] || crc8(&frame[3..5]) != frame[5]) {
        return Err(DriverError::ChecksumMismatch);
    }
    let raw_temperature = u16::from_be_bytes([frame[0], frame[1]]);
    let raw_humidity = u16::from_be_bytes([frame[3], frame[4]]);
    Ok(Measurement {
        raw_temperature,
        temperature_c: celsius_from_raw(raw_temperature),
        humidity_pct: humidity_from_raw(raw_humidity),
    })
}

#[derive(Debug, Clone, Copy)]
pub struct Sht30 {
    address: u8,
    timeout: Duration,
    validate_crc: bool,
}

impl Sht30 {
    pub fn new(timeout: Duration, validate_crc: bool) -> Self {
        Self {
            address: SHT30_ADDR,
            timeout,
            validate_crc,
        }
    }

    /// Trigger a measurement and decode temperature and humidity.
    pub fn read_measurement<B: BusPort>(&self, bus: &mut B) -> Result<Measurement, DriverError> {
        let mut frame = [0u8; FRAME_LEN];
        bus.transact(self.address, &CMD_MEASURE_HIGH_STRETCH, &mut frame, self.timeout)?;
        decode_frame(&frame, self.validate_crc)
    }

    /// Trigger a measurement and return the temperature in °C.
    pub fn read_temperature<B: BusPort>(&self, bus: &mut B) -> Result<f32, DriverError> {
        self.read_measurement(bus).map(|m| m.temperature_c)
    }
}
