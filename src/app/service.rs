//! Control loop, the hexagonal core.
//!
//! [`ControlLoop`] owns the thermostat and the fault counters.  Each cycle
//! runs strictly in order:
//!
//! ```text
//!  selection ─▶ ClockPort ─▶ ThermometerPort ─▶ Thermostat ─▶ HeaterPort
//!                  │               │                             │
//!                  └───────────────┴──────── EventSink ◀─────────┘
//! ```
//!
//! A clock fault is fatal or skipped per [`RtcFaultPolicy`]; a sensor
//! fault skips the thermostat and backs off, leaving the heater as it was
//! (unless the optional failsafe trips).  A heater write that failed is
//! retried at the start of every cycle until the output matches the
//! thermostat.

use core::convert::Infallible;
use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use log::{error, info};

use crate::config::{RtcFaultPolicy, SystemConfig};
use crate::control::{HeaterState, Profile, Thermostat};
use crate::error::{Error, Result};

use super::events::AppEvent;
use super::ports::{ClockPort, EventSink, HeaterPort, ThermometerPort};
use super::selection::ProfileSelector;

/// How a single cycle ended.  Decides the wait before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Clock, sensor and thermostat all ran.
    Completed,
    /// The sensor failed; the thermostat was not evaluated.
    SensorSkipped,
    /// The clock failed under [`RtcFaultPolicy::SkipCycle`].
    ClockSkipped,
}

pub struct ControlLoop {
    config: SystemConfig,
    thermostat: Thermostat,
    selector: Arc<ProfileSelector>,
    cycle_count: u64,
    sensor_failures: u32,
}

impl ControlLoop {
    /// Validate `config` and build the loop.  The heater starts OFF with no
    /// profile selected.
    pub fn new(config: SystemConfig, selector: Arc<ProfileSelector>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            thermostat: Thermostat::new(config.hysteresis_c),
            config,
            selector,
            cycle_count: 0,
            sensor_failures: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the heater to its initial OFF state.
    pub fn start(&mut self, hw: &mut impl HeaterPort, sink: &mut impl EventSink) {
        if let Err(error) = hw.set_heater(false) {
            sink.emit(&AppEvent::HeaterFault {
                commanded: HeaterState::Off,
                error,
            });
        }
        sink.emit(&AppEvent::Started(self.thermostat.profile()));
        info!(
            "Control loop started (period={}ms, backoff={}ms, rtc policy={:?})",
            self.config.cycle_period_ms, self.config.sensor_backoff_ms, self.config.rtc_fault_policy
        );
    }

    /// Run cycles forever.  Returns only when a cycle fails fatally.
    pub fn run(
        &mut self,
        hw: &mut (impl ClockPort + ThermometerPort + HeaterPort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) -> Result<Infallible> {
        loop {
            let outcome = self.cycle(hw, sink)?;
            delay.delay_ms(self.delay_after(outcome));
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: selection → heater resync → clock → sensor →
    /// thermostat.
    pub fn cycle(
        &mut self,
        hw: &mut (impl ClockPort + ThermometerPort + HeaterPort),
        sink: &mut impl EventSink,
    ) -> Result<CycleOutcome> {
        self.cycle_count += 1;

        // 1. Apply any selection published by the menu task
        if let Some(profile) = self.selector.take() {
            if self.thermostat.select(profile) {
                sink.emit(&AppEvent::ProfileSelected(profile));
            }
        }
        self.resync_heater(hw, sink);

        // 2. Clock
        match hw.read_time() {
            Ok(time) => {
                sink.emit(&AppEvent::Time(time));
                if time.validate().is_err() {
                    sink.emit(&AppEvent::InvalidTime(time));
                }
            }
            Err(e) => {
                sink.emit(&AppEvent::ClockFault(e));
                return match self.config.rtc_fault_policy {
                    RtcFaultPolicy::Abort => {
                        error!("RTC unreadable ({}), aborting control loop", e);
                        Err(Error::Clock(e))
                    }
                    RtcFaultPolicy::SkipCycle => Ok(CycleOutcome::ClockSkipped),
                };
            }
        }

        // 3. Sensor
        let measurement = match hw.read_measurement() {
            Ok(m) => {
                self.sensor_failures = 0;
                m
            }
            Err(e) => {
                self.sensor_failures = self.sensor_failures.saturating_add(1);
                sink.emit(&AppEvent::SensorFault {
                    error: e,
                    consecutive: self.sensor_failures,
                });
                self.check_failsafe(hw, sink);
                return Ok(CycleOutcome::SensorSkipped);
            }
        };
        sink.emit(&AppEvent::Reading {
            temperature_c: measurement.temperature_c,
            humidity_pct: measurement.humidity_pct,
        });

        // 4. Thermostat
        if let Some(state) = self.thermostat.update(measurement.temperature_c) {
            self.apply_heater(state, hw, sink);
        }
        let profile = self.thermostat.profile();
        if profile.is_active() {
            sink.emit(&AppEvent::Target {
                profile,
                target_c: profile.target_c(),
            });
        }

        Ok(CycleOutcome::Completed)
    }

    /// Milliseconds to wait after a cycle that ended with `outcome`.
    pub fn delay_after(&self, outcome: CycleOutcome) -> u32 {
        match outcome {
            CycleOutcome::Completed => self.config.cycle_period_ms,
            CycleOutcome::SensorSkipped | CycleOutcome::ClockSkipped => {
                self.config.sensor_backoff_ms
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn heater(&self) -> HeaterState {
        self.thermostat.heater()
    }

    pub fn profile(&self) -> Profile {
        self.thermostat.profile()
    }

    /// Cycles started since construction, including failed ones.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn consecutive_sensor_failures(&self) -> u32 {
        self.sensor_failures
    }

    // ── Internal ──────────────────────────────────────────────

    /// Trips exactly when the failure count reaches the limit, so a long
    /// outage forces OFF once rather than every cycle.  Silent when the
    /// heater is already OFF.
    fn check_failsafe(&mut self, hw: &mut impl HeaterPort, sink: &mut impl EventSink) {
        let limit = self.config.heater_failsafe_after;
        if limit == 0 || self.sensor_failures != limit {
            return;
        }
        if let Some(state) = self.thermostat.force_off() {
            sink.emit(&AppEvent::FailsafeTripped {
                consecutive: self.sensor_failures,
            });
            self.apply_heater(state, hw, sink);
        }
    }

    /// Rewrite the output if an earlier write left it disagreeing with the
    /// thermostat.
    fn resync_heater(&self, hw: &mut impl HeaterPort, sink: &mut impl EventSink) {
        let wanted = self.thermostat.heater();
        if hw.is_heater_on() != wanted.is_on() {
            self.apply_heater(wanted, hw, sink);
        }
    }

    fn apply_heater(
        &self,
        state: HeaterState,
        hw: &mut impl HeaterPort,
        sink: &mut impl EventSink,
    ) {
        match hw.set_heater(state.is_on()) {
            Ok(()) => sink.emit(&AppEvent::HeaterChanged(state)),
            Err(error) => sink.emit(&AppEvent::HeaterFault {
                commanded: state,
                error,
            }),
        }
    }
}
