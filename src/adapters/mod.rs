//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                     | Connects to              |
//! |-------------|--------------------------------|--------------------------|
//! | `hardware`  | ClockPort, ThermometerPort     | DS1307 + SHT30 over I2C  |
//! |             | HeaterPort                     | heater relay GPIO        |
//! | `log_sink`  | EventSink                      | Serial log output        |

pub mod hardware;
pub mod log_sink;
