//! Drybox Firmware: main entry point
//!
//! Hexagonal layout: one control loop owns the I2C bus and the heater,
//! a console task feeds it profile selections.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter                      LogEventSink           │
//! │  (Clock + Thermometer + Heater)       (EventSink)            │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ───────────────────    │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │         ControlLoop (pure logic)                   │      │
//! │  │  Thermostat · Profile · fault policy               │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                          ▲                                   │
//! │              ProfileSelector (Signal)                        │
//! │                          │                                   │
//! │                  menu task (console)                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;
use log::{error, info, warn};

use drybox::adapters::hardware::HardwareAdapter;
use drybox::adapters::log_sink::LogEventSink;
use drybox::app::ports::HeaterPort;
use drybox::app::selection::ProfileSelector;
use drybox::app::service::ControlLoop;
use drybox::bus::esp::EspI2cBus;
use drybox::config::SystemConfig;
use drybox::drivers::heater::HeaterDriver;
use drybox::drivers::task::spawn_task;
use drybox::menu::{MENU_REPROMPT_MS, MenuSession};
use drybox::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Drybox v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();
    let peripherals = Peripherals::take()?;

    // ── 2. I2C bus ────────────────────────────────────────────
    // A failed bus bring-up is fatal.
    let i2c_config = I2cConfig::new().baudrate(pins::I2C_FREQ_HZ.Hz());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio22,
        &i2c_config,
    )?;
    info!(
        "I2C{} up (SDA={}, SCL={}, {} Hz)",
        pins::I2C_PORT,
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_FREQ_HZ
    );

    // ── 3. Heater output ──────────────────────────────────────
    let heater = HeaterDriver::new(PinDriver::output(peripherals.pins.gpio23)?)?;
    info!("Heater relay on GPIO{}", pins::HEATER_GPIO);

    let mut hw = HardwareAdapter::new(EspI2cBus::new(i2c), heater, &config);
    let mut log_sink = LogEventSink::new();

    // ── 4. Menu task ──────────────────────────────────────────
    let selector = Arc::new(ProfileSelector::new());
    let menu_selector = Arc::clone(&selector);
    spawn_task(
        pins::MENU_TASK_NAME,
        pins::MENU_TASK_PRIORITY,
        pins::MENU_TASK_STACK_KB,
        move || {
            let mut session = MenuSession::new();
            loop {
                let stdin = std::io::stdin();
                if let Err(e) = session.run(stdin.lock(), std::io::stdout(), &menu_selector) {
                    warn!("Console read failed: {}", e);
                }
                FreeRtos::delay_ms(MENU_REPROMPT_MS);
            }
        },
    )?;

    // ── 5. Control loop ───────────────────────────────────────
    let mut app = ControlLoop::new(config, selector)?;
    app.start(&mut hw, &mut log_sink);

    match app.run(&mut hw, &mut log_sink, &mut FreeRtos) {
        Ok(never) => match never {},
        Err(e) => {
            if let Err(off) = hw.set_heater(false) {
                error!("Heater could not be switched OFF: {}", off);
            }
            error!("Control loop stopped: {}", e);
            Err(anyhow!(e))
        }
    }
}
