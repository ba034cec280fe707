//! Port traits: the hexagonal boundary between the control loop and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! [`HardwareAdapter`](crate::adapters::hardware::HardwareAdapter)
//! implements the three hardware ports over the real drivers; tests
//! implement them with scripted mocks.

use crate::error::DriverError;
use crate::sensors::{CalendarTime, Measurement};

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock source.
pub trait ClockPort {
    fn read_time(&mut self) -> Result<CalendarTime, DriverError>;
}

/// Chamber climate source.
pub trait ThermometerPort {
    fn read_measurement(&mut self) -> Result<Measurement, DriverError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

pub trait HeaterPort {
    /// Switch the heater output.  On error the output keeps its previous
    /// level.
    fn set_heater(&mut self, on: bool) -> Result<(), DriverError>;

    /// Last level successfully written to the heater output.
    fn is_heater_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
