//! Level-filtered diagnostic logger.
//!
//! Five public functions wrapping process-wide mutable state: a global
//! enable flag and an installable callback, rather than a per-catalog
//! logging option. This keeps the logging path dependency-free, with a
//! pluggable callback in place of a hardcoded `eprintln!`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::sync::RwLock;

/// Severity of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
        }
    }
}

/// User-supplied sink for log lines. Receives the level and the formatted
/// message, with no further formatting applied.
pub type LogCallback = fn(Level, &str);

static ENABLED: AtomicBool = AtomicBool::new(false);
static CALLBACK: OnceLock<RwLock<LogCallback>> = OnceLock::new();

fn default_callback(level: Level, msg: &str) {
    eprintln!("[mocat] {}: {}", level.label(), msg);
}

fn callback_slot() -> &'static RwLock<LogCallback> {
    CALLBACK.get_or_init(|| RwLock::new(default_callback))
}

/// Turn logging on or off. Off by default; once turned on it stays on
/// until explicitly disabled again.
pub fn enable_logging(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns whether logging is currently enabled.
pub fn logging_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Install a custom sink for log lines, replacing the default stderr
/// formatter.
pub fn set_log_callback(callback: LogCallback) {
    *callback_slot().write().expect("log callback lock poisoned") = callback;
}

fn dispatch(level: Level, msg: &str) {
    if !logging_enabled() {
        return;
    }
    let callback = *callback_slot().read().expect("log callback lock poisoned");
    callback(level, msg);
}

pub fn log_error(msg: &str) {
    dispatch(Level::Error, msg);
}

pub fn log_warn(msg: &str) {
    dispatch(Level::Warn, msg);
}

pub fn log_info(msg: &str) {
    dispatch(Level::Info, msg);
}
