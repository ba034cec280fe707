//! Outbound application events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through the
//! [`EventSink`](super::ports::EventSink) port; the log adapter turns them
//! into console lines.

use crate::control::{HeaterState, Profile};
use crate::error::DriverError;
use crate::sensors::CalendarTime;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The control loop has started (carries the initial profile).
    Started(Profile),

    /// Current wall-clock time read from the RTC.
    Time(CalendarTime),

    /// The RTC returned a snapshot outside calendar ranges.
    InvalidTime(CalendarTime),

    /// A successful sensor measurement.
    Reading { temperature_c: f32, humidity_pct: f32 },

    /// Active profile and its target, logged each evaluated cycle.
    Target { profile: Profile, target_c: f32 },

    /// The heater output changed.  Emitted once per edge.
    HeaterChanged(HeaterState),

    /// Writing `commanded` to the heater output failed; retried next cycle.
    HeaterFault { commanded: HeaterState, error: DriverError },

    /// The operator's profile selection took effect.
    ProfileSelected(Profile),

    /// The sensor read failed; `consecutive` counts failures in a row.
    SensorFault { error: DriverError, consecutive: u32 },

    /// The RTC read failed.
    ClockFault(DriverError),

    /// Too many consecutive sensor failures; the heater was forced OFF.
    FailsafeTripped { consecutive: u32 },
}
