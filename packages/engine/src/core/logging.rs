//! Console logger for the WASM build.
//!
//! Call sites use the `log` macros. On `wasm32` the records go to the browser
//! console through `web_sys`; elsewhere the host installs its own logger (or
//! none, in which case records are dropped).

#[cfg(target_arch = "wasm32")]
use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the browser console. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_console_logger(debug: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if debug { LevelFilter::Debug } else { LevelFilter::Info });
    }
}

/// Native builds leave logger installation to the host.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_console_logger(_debug: bool) {}
