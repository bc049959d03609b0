#![deny(missing_docs)]
//! Shared logging utilities for the suggestion workspace.
//!
//! This crate provides the `suggest_*` logging macros used by the core, the
//! engine and the terminal app, plus a minimal test initializer for the
//! global logger.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! suggest_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: "suggest", $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! suggest_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: "suggest", $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! suggest_info {
    ($($arg:tt)*) => {{
        log::info!(target: "suggest", $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! suggest_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: "suggest", $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! suggest_error {
    ($($arg:tt)*) => {{
        log::error!(target: "suggest", $($arg)*);
    }};
}

/// Initializes a terminal logger for use in tests.
///
/// Safe to call from every test: it no-ops if a logger is already installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
