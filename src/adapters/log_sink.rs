//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (ESP-IDF console on target).  Lines are tagged so an operator can
//! grep one concern at a time.

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::control::HeaterState;

fn level(state: HeaterState) -> &'static str {
    match state {
        HeaterState::On => "ON",
        HeaterState::Off => "OFF",
    }
}

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(profile) => {
                info!("START | mode={}", profile);
            }
            AppEvent::Time(t) => {
                info!("TIME | {}", t);
            }
            AppEvent::InvalidTime(t) => {
                warn!("TIME | out-of-range RTC snapshot {:?}", t);
            }
            AppEvent::Reading {
                temperature_c,
                humidity_pct,
            } => {
                info!(
                    "TEMP | {:.2}\u{00b0}C | RH={:.1}%",
                    temperature_c, humidity_pct
                );
            }
            AppEvent::Target { profile, target_c } => {
                info!("TEMP | target={:.1}\u{00b0}C (mode: {})", target_c, profile);
            }
            AppEvent::HeaterChanged(state) => {
                info!("HEATER | {}", level(*state));
            }
            AppEvent::HeaterFault { commanded, error } => {
                error!("FAULT | heater {} write failed: {}", level(*commanded), error);
            }
            AppEvent::ProfileSelected(profile) => {
                info!(
                    "MODE | selected {} ({:.1}\u{00b0}C)",
                    profile,
                    profile.target_c()
                );
            }
            AppEvent::SensorFault { error, consecutive } => {
                error!("FAULT | SHT30 read error: {} (x{})", error, consecutive);
            }
            AppEvent::ClockFault(e) => {
                error!("FAULT | DS1307 read error: {}", e);
            }
            AppEvent::FailsafeTripped { consecutive } => {
                warn!(
                    "FAULT | {} consecutive sensor failures, forcing heater OFF",
                    consecutive
                );
            }
        }
    }
}
