//! Browser console logging
//!
//! Routes the `log` facade to the developer console via `console_log`.
//! The logger is installed before configuration is read so that a rejected
//! configuration island is still reported; the configured level is applied
//! afterwards.

use crate::config::LogLevel;

/// Install the console logger and panic hook
///
/// Safe to call more than once; later calls keep the first logger.
pub fn init(level: LogLevel) {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(level.into()).is_err() {
        log::debug!("console logger already installed");
    }
    set_level(level);
}

/// Change verbosity of the installed logger
pub fn set_level(level: LogLevel) {
    log::set_max_level(log::Level::from(level).to_level_filter());
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_warnings_reach_console_before_config_is_read() {
        init(LogLevel::default());

        assert!(log::log_enabled!(log::Level::Warn));
        assert!(!log::log_enabled!(log::Level::Debug));
    }
}
