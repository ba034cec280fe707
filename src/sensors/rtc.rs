//! DS1307 real-time clock driver.
//!
//! The timekeeping registers are seven consecutive BCD bytes starting at
//! offset 0x00:
//!
//! | Offset | Field   | Notes                              |
//! |--------|---------|------------------------------------|
//! | 0x00   | seconds | bit 7 = CH (clock halt), masked    |
//! | 0x01   | minutes |                                    |
//! | 0x02   | hours   | 24-hour mode                       |
//! | 0x03   | weekday | 1–7                                |
//! | 0x04   | date    | 1–31                               |
//! | 0x05   | month   | 1–12                               |
//! | 0x06   | year    | 00–99, within the 21st century     |
//!
//! Both operations are single self-contained bus transactions.

use core::fmt;
use core::time::Duration;

use crate::bcd;
use crate::bus::BusPort;
use crate::error::DriverError;

/// Fixed 7-bit bus address of the DS1307.
pub const DS1307_ADDR: u8 = 0x68;

const REG_SECONDS: u8 = 0x00;
const CLOCK_HALT: u8 = 0x80;
const REGISTER_COUNT: usize = 7;

/// Wall-clock time as decoded from one register snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    pub second: u8,
    pub minute: u8,
    pub hour: u8,
    pub weekday: u8,
    pub day: u8,
    pub month: u8,
    /// Year within the century (24 = 2024).
    pub year: u8,
}

impl CalendarTime {
    /// Decode a raw register snapshot.  Performs no range validation.
    pub fn from_registers(regs: &[u8; REGISTER_COUNT]) -> Self {
        Self {
            second: bcd::decode(regs[0] & !CLOCK_HALT),
            minute: bcd::decode(regs[1]),
            hour: bcd::decode(regs[2]),
            weekday: bcd::decode(regs[3]),
            day: bcd::decode(regs[4]),
            month: bcd::decode(regs[5]),
            year: bcd::decode(regs[6]),
        }
    }

    /// Encode into register order.  The clock-halt bit is left clear so a
    /// write also (re)starts the oscillator.
    pub fn to_registers(&self) -> Result<[u8; REGISTER_COUNT], DriverError> {
        self.validate()?;
        let fields = [
            self.second,
            self.minute,
            self.hour,
            self.weekday,
            self.day,
            self.month,
            self.year,
        ];
        let mut regs = [0u8; REGISTER_COUNT];
        for (reg, field) in regs.iter_mut().zip(fields) {
            *reg = bcd::encode(field).ok_or(DriverError::InvalidTime)?;
        }
        Ok(regs)
    }

    /// Check every field against its calendar range.
    pub fn validate(&self) -> Result<(), DriverError> {
        let ok = self.second <= 59
            && self.minute <= 59
            && self.hour <= 23
            && (1..=7).contains(&self.weekday)
            && (1..=31).contains(&self.day)
            && (1..=12).contains(&self.month)
            && self.year <= 99;
        if ok { Ok(()) } else { Err(DriverError::InvalidTime) }
    }

    pub fn full_year(&self) -> u16 {
        2000 + u16::from(self.year)
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02} {:02}/{:02}/20{:02}",
            self.hour, self.minute, self.second, self.day, self.month, self.year
        )
    }
}

/// DS1307 driver.  Holds no bus handle; every call borrows one.
#[derive(Debug, Clone, Copy)]
pub struct Ds1307 {
    address: u8,
    timeout: Duration,
}

impl Ds1307 {
    pub fn new(timeout: Duration) -> Self {
        Self {
            address: DS1307_ADDR,
            timeout,
        }
    }

    /// Read and decode the seven timekeeping registers.
    pub fn read_time<B: BusPort>(&self, bus: &mut B) -> Result<CalendarTime, DriverError> {
        let mut regs = [0u8; REGISTER_COUNT];
        bus.transact(self.address, &[REG_SECONDS], &mut regs, self.timeout)?;
        Ok(CalendarTime::from_registers(&regs))
    }

    /// Write all seven timekeeping registers in one transaction.
    pub fn set_time<B: BusPort>(&self, bus: &mut B, time: &CalendarTime) -> Result<(), DriverError> {
        let regs = time.to_registers()?;
        let mut frame = [0u8; REGISTER_COUNT + 1];
        frame[0] = REG_SECONDS;
        frame[1..].copy_from_slice(&regs);
        bus.transact(self.address, &frame, &mut [], self.timeout)?;
        Ok(())
    }
}
