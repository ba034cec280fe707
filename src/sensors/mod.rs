//! Bus-attached sensor drivers: the DS1307 clock and the SHT30
//! temperature/humidity sensor.
//!
//! Drivers hold only their address and transaction settings; the bus is
//! borrowed per call so one [`BusPort`](crate::bus::BusPort) serves both.

pub mod rtc;
pub mod sht30;

pub use rtc::{CalendarTime, Ds1307};
pub use sht30::{Measurement, Sht30};
