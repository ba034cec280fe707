//! Mock hardware adapter for integration tests.
//!
//! Plays back scripted clock and sensor results and records every port
//! call, so tests can assert on bus ordering and heater actuation
//! without a real I2C bus or relay.

use std::collections::VecDeque;

use drybox::app::events::AppEvent;
use drybox::app::ports::{ClockPort, EventSink, HeaterPort, ThermometerPort};
use drybox::error::{BusError, DriverError};
use drybox::sensors::{CalendarTime, Measurement};
use embedded_hal::delay::DelayNs;

pub const NACK: DriverError = DriverError::BusFailure(BusError::Nack);

/// 23:45:30 Saturday 15/06/2024.
pub const SAMPLE_TIME: CalendarTime = CalendarTime {
    second: 30,
    minute: 45,
    hour: 23,
    weekday: 7,
    day: 15,
    month: 6,
    year: 24,
};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HwCall {
    ReadTime,
    ReadMeasurement,
    SetHeater(bool),
}

// ── MockHardware ──────────────────────────────────────────────

/// Clock reads default to [`SAMPLE_TIME`] once the script runs out;
/// sensor reads default to a NACK.
pub struct MockHardware {
    pub calls: Vec<HwCall>,
    clock: VecDeque<Result<CalendarTime, DriverError>>,
    sensor: VecDeque<Result<Measurement, DriverError>>,
    heater_on: bool,
    /// Number of upcoming heater writes that fail.
    failing_heater_writes: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            clock: VecDeque::new(),
            sensor: VecDeque::new(),
            heater_on: false,
            failing_heater_writes: 0,
        }
    }

    pub fn with_temperatures(temps: &[f32]) -> Self {
        let mut hw = Self::new();
        for &t in temps {
            hw.push_temperature(t);
        }
        hw
    }

    pub fn push_temperature(&mut self, temperature_c: f32) {
        self.sensor.push_back(Ok(Measurement {
            raw_temperature: 0,
            temperature_c,
            humidity_pct: 40.0,
        }));
    }

    pub fn push_sensor_error(&mut self, e: DriverError) {
        self.sensor.push_back(Err(e));
    }

    pub fn fail_heater_writes(&mut self, count: usize) {
        self.failing_heater_writes = count;
    }

    pub fn push_clock(&mut self, result: Result<CalendarTime, DriverError>) {
        self.clock.push_back(result);
    }

    /// Heater levels written, in order.
    pub fn heater_writes(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::SetHeater(on) => Some(*on),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: HwCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for MockHardware {
    fn read_time(&mut self) -> Result<CalendarTime, DriverError> {
        self.calls.push(HwCall::ReadTime);
        self.clock.pop_front().unwrap_or(Ok(SAMPLE_TIME))
    }
}

impl ThermometerPort for MockHardware {
    fn read_measurement(&mut self) -> Result<Measurement, DriverError> {
        self.calls.push(HwCall::ReadMeasurement);
        self.sensor.pop_front().unwrap_or(Err(NACK))
    }
}

impl HeaterPort for MockHardware {
    fn set_heater(&mut self, on: bool) -> Result<(), DriverError> {
        self.calls.push(HwCall::SetHeater(on));
        if self.failing_heater_writes > 0 {
            self.failing_heater_writes -= 1;
            return Err(DriverError::PinWrite);
        }
        self.heater_on = on;
        Ok(())
    }

    fn is_heater_on(&self) -> bool {
        self.heater_on
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── RecordingDelay ────────────────────────────────────────────

/// Records requested waits instead of sleeping.
pub struct RecordingDelay {
    pub waits_ns: Vec<u64>,
}

#[allow(dead_code)]
impl RecordingDelay {
    pub fn new() -> Self {
        Self {
            waits_ns: Vec::new(),
        }
    }

    pub fn waits_ms(&self) -> Vec<u64> {
        self.waits_ns.iter().map(|ns| ns / 1_000_000).collect()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ns.push(u64::from(ms) * 1_000_000);
    }
}
