//! System configuration parameters
//!
//! All tunables for the dryer controller.  Values are compile-time
//! defaults; nothing is persisted across restarts.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::control::thermostat::DEFAULT_HYSTERESIS_C;
use crate::error::{Error, Result};

/// What the control loop does when the real-time clock cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RtcFaultPolicy {
    /// Treat a clock fault as unrecoverable and stop the loop.
    #[default]
    Abort,
    /// Log the fault, skip the whole cycle and retry after the sensor
    /// backoff period.
    SkipCycle,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Delay between successful control cycles (milliseconds)
    pub cycle_period_ms: u32,
    /// Delay after a failed sensor read (milliseconds)
    pub sensor_backoff_ms: u32,
    /// Per-transaction bus timeout (milliseconds)
    pub bus_timeout_ms: u32,

    // --- Control ---
    /// Dead-band below target before the heater switches back on (°C)
    pub hysteresis_c: f32,

    // --- Fault handling ---
    pub rtc_fault_policy: RtcFaultPolicy,
    /// Verify the SHT30 CRC-8 on every frame.
    pub validate_sensor_crc: bool,
    /// Force the heater OFF after this many consecutive sensor failures.
    /// 0 disables the failsafe and leaves the heater in its last state.
    pub heater_failsafe_after: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            cycle_period_ms: 3000,
            sensor_backoff_ms: 2000,
            bus_timeout_ms: 1000,

            hysteresis_c: DEFAULT_HYSTERESIS_C,

            rtc_fault_policy: RtcFaultPolicy::Abort,
            validate_sensor_crc: false,
            heater_failsafe_after: 0,
        }
    }
}

impl SystemConfig {
    pub fn bus_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.bus_timeout_ms))
    }

    /// Reject values that would stall or destabilise the loop.
    pub fn validate(&self) -> Result<()> {
        if self.cycle_period_ms == 0 {
            return Err(Error::Config("cycle_period_ms must be non-zero"));
        }
        if self.sensor_backoff_ms == 0 {
            return Err(Error::Config("sensor_backoff_ms must be non-zero"));
        }
        if self.bus_timeout_ms == 0 {
            return Err(Error::Config("bus_timeout_ms must be non-zero"));
        }
        if self.hysteresis_c.is_nan() || self.hysteresis_c <= 0.0 {
            return Err(Error::Config("hysteresis_c must be positive"));
        }
        Ok(())
    }
}
