//! Console Logger
//!
//! Routes `log` records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        let line = JsValue::from(format_line(record.level(), record.target(), &message));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Warn, "todo_client::client", "AddTodo failed with status 500"),
            "[WARN] todo_client::client: AddTodo failed with status 500"
        );
    }
}
