//! Application core: pure domain logic, zero I/O.
//!
//! The control loop sequencing, fault policy and profile handoff live
//! here.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer testable without peripherals.

pub mod events;
pub mod ports;
pub mod selection;
pub mod service;
