//! Hysteresis (bang-bang) thermostat.
//!
//! ```text
//!            temp < target - band
//!   ┌─────┐ ────────────────────────▶ ┌────┐
//!   │ OFF │                           │ ON │
//!   └─────┘ ◀──────────────────────── └────┘
//!             temp >= target, or profile None
//! ```
//!
//! Between `target - band` and `target` the current state is held, which
//! keeps the relay from short-cycling around the setpoint.

use super::profile::Profile;

/// Default width of the dead-band below target (°C).
pub const DEFAULT_HYSTERESIS_C: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaterState {
    #[default]
    Off,
    On,
}

impl HeaterState {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Active profile plus the heater output it drives.  Starts OFF with no
/// profile selected.
#[derive(Debug, Clone)]
pub struct Thermostat {
    band_c: f32,
    profile: Profile,
    heater: HeaterState,
}

impl Thermostat {
    pub fn new(band_c: f32) -> Self {
        Self {
            band_c,
            profile: Profile::None,
            heater: HeaterState::Off,
        }
    }

    /// Switch profile.  Returns `true` if it changed.
    pub fn select(&mut self, profile: Profile) -> bool {
        let changed = self.profile != profile;
        self.profile = profile;
        changed
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn heater(&self) -> HeaterState {
        self.heater
    }

    /// Evaluate one temperature sample.
    ///
    /// Returns the new state only on an edge, so each transition is
    /// actuated and logged once.
    pub fn update(&mut self, temperature_c: f32) -> Option<HeaterState> {
        let next = if self.profile.is_active() {
            let target = self.profile.target_c();
            if temperature_c >= target {
                HeaterState::Off
            } else if temperature_c < target - self.band_c {
                HeaterState::On
            } else {
                self.heater
            }
        } else {
            HeaterState::Off
        };
        self.transition(next)
    }

    /// Drive the output OFF regardless of profile or temperature.
    pub fn force_off(&mut self) -> Option<HeaterState> {
        self.transition(HeaterState::Off)
    }

    fn transition(&mut self, next: HeaterState) -> Option<HeaterState> {
        if next == self.heater {
            return None;
        }
        self.heater = next;
        Some(next)
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self::new(DEFAULT_HYSTERESIS_C)
    }
}
