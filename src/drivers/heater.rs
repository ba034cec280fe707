//! Heater relay driver.
//!
//! A single digital output switches the heater relay (or SSR).  The driver
//! is generic over `embedded-hal`'s `OutputPin`, so the same code drives an
//! ESP-IDF `PinDriver` on target and a mock pin in tests.
//!
//! ## Safety contract
//!
//! This is a dumb actuator: it tracks the last commanded level and nothing
//! else.  When to heat is the thermostat's decision.

use embedded_hal::digital::OutputPin;

pub struct HeaterDriver<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> HeaterDriver<P> {
    /// Wrap `pin` and drive it low so the heater starts OFF.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, on: false })
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    /// Last level successfully written to the pin.
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn release(self) -> P {
        self.pin
    }
}
