//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (monotonic millisecond timestamps)
//! - Logger backends (env_logger natively, browser console on web)

use std::cell::Cell;

/// Source of monotonic timestamps in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Hand-driven clock for tests and headless simulation
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Install the logger for this platform
///
/// `filter` is used when RUST_LOG is not set. Calling this twice is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    // try_init only fails if a logger is already installed
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging(filter: &str) {
    console_error_panic_hook::set_once();
    let level = filter.parse().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(100.0);
        assert_eq!(clock.now_ms(), 100.0);
        clock.advance(16.5);
        assert_eq!(clock.now_ms(), 116.5);
        clock.set(5.0);
        assert_eq!(clock.now_ms(), 5.0);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging("debug");
        init_logging("info");
    }
}
