//! Heater control: drying profiles and the hysteresis thermostat.

pub mod profile;
pub mod thermostat;

pub use profile::Profile;
pub use thermostat::{HeaterState, Thermostat};
