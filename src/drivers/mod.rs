//! Actuator drivers and task plumbing.

pub mod heater;
pub mod task;
