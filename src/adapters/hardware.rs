//! Hardware adapter. Bridges the bus, both sensor drivers and the heater
//! relay to the domain port traits.
//!
//! Owns the single [`BusPort`]; the RTC and SHT30 drivers borrow it one
//! transaction at a time, so only the control loop ever touches the bus.

use embedded_hal::digital::OutputPin;
use log::error;

use crate::app::ports::{ClockPort, HeaterPort, ThermometerPort};
use crate::bus::BusPort;
use crate::config::SystemConfig;
use crate::drivers::heater::HeaterDriver;
use crate::error::DriverError;
use crate::sensors::{CalendarTime, Ds1307, Measurement, Sht30};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<B, P> {
    bus: B,
    rtc: Ds1307,
    sht30: Sht30,
    heater: HeaterDriver<P>,
}

impl<B: BusPort, P: OutputPin> HardwareAdapter<B, P> {
    pub fn new(bus: B, heater: HeaterDriver<P>, config: &SystemConfig) -> Self {
        Self {
            bus,
            rtc: Ds1307::new(config.bus_timeout()),
            sht30: Sht30::new(config.bus_timeout(), config.validate_sensor_crc),
            heater,
        }
    }

    /// Set the RTC (e.g. from the console after a battery swap).
    pub fn set_time(&mut self, time: &CalendarTime) -> Result<(), DriverError> {
        self.rtc.set_time(&mut self.bus, time)
    }

    pub fn release(self) -> (B, HeaterDriver<P>) {
        (self.bus, self.heater)
    }
}

// ── Sensor ports ──────────────────────────────────────────────

impl<B: BusPort, P: OutputPin> ClockPort for HardwareAdapter<B, P> {
    fn read_time(&mut self) -> Result<CalendarTime, DriverError> {
        self.rtc.read_time(&mut self.bus)
    }
}

impl<B: BusPort, P: OutputPin> ThermometerPort for HardwareAdapter<B, P> {
    fn read_measurement(&mut self) -> Result<Measurement, DriverError> {
        self.sht30.read_measurement(&mut self.bus)
    }
}

// ── HeaterPort implementation ─────────────────────────────────

impl<B: BusPort, P: OutputPin> HeaterPort for HardwareAdapter<B, P> {
    fn set_heater(&mut self, on: bool) -> Result<(), DriverError> {
        self.heater.set(on).map_err(|e| {
            error!("Heater relay write failed: {:?}", e);
            DriverError::PinWrite
        })
    }

    fn is_heater_on(&self) -> bool {
        self.heater.is_on()
    }
}
