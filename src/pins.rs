//! GPIO / peripheral assignments for the dryer controller board.
//!
//! Single source of truth: `main` references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// I²C bus (DS1307 RTC + SHT30 sensor)
// ---------------------------------------------------------------------------

/// I2C controller number.
pub const I2C_PORT: u8 = 0;
pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 22;
/// Standard-mode bus clock.  Both devices top out at 100 kHz (DS1307).
pub const I2C_FREQ_HZ: u32 = 100_000;

// ---------------------------------------------------------------------------
// Heater
// ---------------------------------------------------------------------------

/// Digital output to the heater relay / SSR.  HIGH = heating.
pub const HEATER_GPIO: i32 = 23;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Console menu task (NUL-terminated for `esp_pthread_set_cfg`).
pub const MENU_TASK_NAME: &str = "menu\0";
pub const MENU_TASK_PRIORITY: u8 = 5;
pub const MENU_TASK_STACK_KB: usize = 4;
