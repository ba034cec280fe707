//! Fuzz target: RTC register and SHT30 frame decoders
//!
//! Feeds arbitrary bytes to both wire decoders and asserts that they never
//! panic and that every decoded value stays inside its physical range.
//!
//! cargo fuzz run fuzz_decoders

#![no_main]

use drybox::sensors::CalendarTime;
use drybox::sensors::sht30::decode_frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some(regs) = data.get(..7).and_then(|s| <&[u8; 7]>::try_from(s).ok()) {
        let time = CalendarTime::from_registers(regs);
        // A snapshot that validates must re-encode without error.
        if time.validate().is_ok() {
            assert!(time.to_registers().is_ok());
        }
    }

    if let Some(frame) = data.get(..6).and_then(|s| <&[u8; 6]>::try_from(s).ok()) {
        for validate_crc in [false, true] {
            if let Ok(m) = decode_frame(frame, validate_crc) {
                assert!((-45.0..=130.0).contains(&m.temperature_c));
                assert!((0.0..=100.0).contains(&m.humidity_pct));
            }
        }
    }
});
