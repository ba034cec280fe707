//! Drybox firmware library.
//!
//! Exposes the pure-logic modules for integration testing and fuzzing.
//! ESP-IDF adapters are compiled only with the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod bcd;
pub mod bus;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod menu;
pub mod pins;
pub mod sensors;
