//! Named thread spawning with explicit priority and stack size.
//!
//! ESP-IDF implements `std::thread` via pthreads, which are thin wrappers
//! around FreeRTOS tasks.  `esp_pthread_set_cfg()` sets thread-local
//! configuration that applies to the *next* `pthread_create()` call from
//! the calling thread, so the config→spawn pair must not be interleaved
//! with other thread creation on the same thread.

use std::io;
use std::thread::JoinHandle;

/// Spawn a FreeRTOS-backed thread with the given priority and stack.
///
/// `name` must be NUL-terminated (e.g. `"menu\0"`); the terminator is
/// stripped for the Rust-side thread name.
#[cfg(feature = "espidf")]
pub fn spawn_task(
    name: &'static str,
    priority: u8,
    stack_kb: usize,
    f: impl FnOnce() + Send + 'static,
) -> io::Result<JoinHandle<()>> {
    // SAFETY: `cfg` is fully initialised by the IDF default constructor and
    // `name` is a 'static NUL-terminated string.
    let ret = unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.prio = i32::from(priority);
        cfg.stack_size = (stack_kb * 1024) as i32;
        cfg.thread_name = name.as_ptr().cast();
        esp_idf_sys::esp_pthread_set_cfg(&cfg)
    };
    if ret != esp_idf_sys::ESP_OK as i32 {
        return Err(io::Error::other(format!("esp_pthread_set_cfg failed: {ret}")));
    }

    let display_name = name.trim_end_matches('\0');
    log::info!(
        "Spawning '{}' (pri={}, stack={}KB)",
        display_name,
        priority,
        stack_kb
    );
    std::thread::Builder::new()
        .name(display_name.into())
        .spawn(f)
}

/// Host fallback: ignores `priority`, uses only `stack_kb`.
#[cfg(not(feature = "espidf"))]
pub fn spawn_task(
    name: &'static str,
    _priority: u8,
    stack_kb: usize,
    f: impl FnOnce() + Send + 'static,
) -> io::Result<JoinHandle<()>> {
    let display_name = name.trim_end_matches('\0');
    log::info!("Spawning '{}' (host, stack={}KB)", display_name, stack_kb);

    std::thread::Builder::new()
        .name(display_name.into())
        .stack_size(stack_kb * 1024)
        .spawn(f)
}
