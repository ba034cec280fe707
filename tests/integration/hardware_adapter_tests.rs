//! End-to-end tests: ControlLoop → HardwareAdapter → drivers → mocked
//! I2C bus and heater pin.
//!
//! Every bus transaction and pin write is checked against
//! `embedded-hal-mock` expectations, so these pin down the wire-level
//! behaviour of a whole cycle.

use std::sync::Arc;

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::MockError;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

use crate::mock_hw::{RecordingSink, SAMPLE_TIME};

use drybox::adapters::hardware::HardwareAdapter;
use drybox::app::events::AppEvent;
use drybox::app::ports::{ClockPort, HeaterPort};
use drybox::app::selection::ProfileSelector;
use drybox::app::service::{ControlLoop, CycleOutcome};
use drybox::bus::HalBus;
use drybox::config::SystemConfig;
use drybox::control::{HeaterState, Profile};
use drybox::drivers::heater::HeaterDriver;
use drybox::error::{BusError, DriverError};
use drybox::sensors::rtc::DS1307_ADDR;
use drybox::sensors::sht30::{CMD_MEASURE_HIGH_STRETCH, SHT30_ADDR};

/// BCD registers for 23:45:30 Saturday 15/06/2024.
const SAMPLE_REGS: [u8; 7] = [0x30, 0x45, 0x23, 0x07, 0x15, 0x06, 0x24];

fn rtc_read() -> I2cTransaction {
    I2cTransaction::write_read(DS1307_ADDR, vec![0x00], SAMPLE_REGS.to_vec())
}

fn sht_read(raw_temp: u16) -> I2cTransaction {
    let [hi, lo] = raw_temp.to_be_bytes();
    I2cTransaction::write_read(
        SHT30_ADDR,
        CMD_MEASURE_HIGH_STRETCH.to_vec(),
        vec![hi, lo, 0x00, 0x80, 0x00, 0x00],
    )
}

type Adapter = HardwareAdapter<HalBus<I2cMock>, PinMock>;

fn make_adapter(bus: &[I2cTransaction], pin: &[PinTransaction]) -> Adapter {
    let heater = HeaterDriver::new(PinMock::new(pin)).unwrap();
    HardwareAdapter::new(HalBus::new(I2cMock::new(bus)), heater, &SystemConfig::default())
}

fn finish(hw: Adapter) {
    let (bus, heater) = hw.release();
    bus.release().done();
    heater.release().done();
}

#[test]
fn cold_chamber_turns_heater_on() {
    // 0x7C57 ≈ 40.0 °C
    let bus = [rtc_read(), sht_read(0x7C57)];
    let pin = [
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];
    let mut hw = make_adapter(&bus, &pin);
    let mut sink = RecordingSink::new();
    let selector = Arc::new(ProfileSelector::new());
    let mut app = ControlLoop::new(SystemConfig::default(), Arc::clone(&selector)).unwrap();

    app.start(&mut hw, &mut sink);
    selector.publish(Profile::Pla);
    let outcome = app.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(outcome, CycleOutcome::Completed);
    assert!(hw.is_heater_on());
    assert!(sink.events.contains(&AppEvent::Time(SAMPLE_TIME)));
    finish(hw);
}

#[test]
fn failed_relay_off_write_is_rewritten() {
    // 0x7C57 ≈ 40.0 °C, 0x9B0F ≈ 61.0 °C
    let bus = [
        rtc_read(),
        sht_read(0x7C57),
        rtc_read(),
        sht_read(0x9B0F),
        rtc_read(),
        sht_read(0x9B0F),
        rtc_read(),
        sht_read(0x9B0F),
    ];
    let pin = [
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low).with_error(MockError::Io(std::io::ErrorKind::Other)),
        PinTransaction::set(PinState::Low),
    ];
    let mut hw = make_adapter(&bus, &pin);
    let mut sink = RecordingSink::new();
    let selector = Arc::new(ProfileSelector::new());
    let mut app = ControlLoop::new(SystemConfig::default(), Arc::clone(&selector)).unwrap();

    app.start(&mut hw, &mut sink);
    selector.publish(Profile::Pla);
    app.cycle(&mut hw, &mut sink).unwrap();
    app.cycle(&mut hw, &mut sink).unwrap();
    assert_eq!(app.heater(), HeaterState::Off);
    assert!(hw.is_heater_on(), "failed write must not update the relay state");

    app.cycle(&mut hw, &mut sink).unwrap();
    app.cycle(&mut hw, &mut sink).unwrap();

    assert!(!hw.is_heater_on());
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::HeaterFault { commanded: HeaterState::Off, .. })),
        1
    );
    assert!(sink.events.contains(&AppEvent::HeaterFault {
        commanded: HeaterState::Off,
        error: DriverError::PinWrite,
    }));
    finish(hw);
}

#[test]
fn sensor_nack_skips_thermostat() {
    let bus = [
        rtc_read(),
        I2cTransaction::write_read(SHT30_ADDR, CMD_MEASURE_HIGH_STRETCH.to_vec(), vec![0; 6])
            .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
    ];
    // new() + start() only.
    let pin = [
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::Low),
    ];
    let mut hw = make_adapter(&bus, &pin);
    let mut sink = RecordingSink::new();
    let mut app = ControlLoop::new(SystemConfig::default(), Arc::new(ProfileSelector::new())).unwrap();

    app.start(&mut hw, &mut sink);
    let outcome = app.cycle(&mut hw, &mut sink).unwrap();

    assert_eq!(outcome, CycleOutcome::SensorSkipped);
    assert!(sink.events.contains(&AppEvent::SensorFault {
        error: DriverError::BusFailure(BusError::Nack),
        consecutive: 1,
    }));
    finish(hw);
}

#[test]
fn clock_read_decodes_bcd_registers() {
    let mut hw = make_adapter(&[rtc_read()], &[PinTransaction::set(PinState::Low)]);

    let time = hw.read_time().unwrap();

    assert_eq!(time, SAMPLE_TIME);
    assert_eq!(time.to_string(), "23:45:30 15/06/2024");
    finish(hw);
}

#[test]
fn set_time_writes_all_registers_at_once() {
    let mut frame = vec![0x00];
    frame.extend_from_slice(&SAMPLE_REGS);
    let mut hw = make_adapter(
        &[I2cTransaction::write(DS1307_ADDR, frame)],
        &[PinTransaction::set(PinState::Low)],
    );

    hw.set_time(&SAMPLE_TIME).unwrap();
    finish(hw);
}
