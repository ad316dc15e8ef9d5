//! Macros for logging [`Message`](super::Message) values.
//!
//! gtd runs as a service, so everything except explicit CLI output goes
//! through `tracing` and ends up in whatever sink the subscriber writes to.
//! The prefixes keep the log readable at a glance:
//!
//! - `msg_success!` ✅ at `info`
//! - `msg_info!` ℹ️ at `info`
//! - `msg_warning!` ⚠️ at `warn`
//! - `msg_error!` ❌ at `error`
//! - `msg_debug!` 🔍 at `debug`
//! - `msg_print!` plain text on stdout, for CLI subcommands
//!
//! ```rust,ignore
//! use gtd::libs::messages::Message;
//! use gtd::{msg_error, msg_success};
//!
//! msg_success!(Message::GoalCreated(1));
//! msg_error!(Message::ServerError("address in use".to_string()));
//! ```

/// Writes a message to stdout. Used for the output of CLI subcommands.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg)
    };
    ($msg:expr, true) => {
        println!("\n{}\n", $msg)
    };
}

/// Logs a success message with ✅ prefix at `info` level.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        tracing::info!("✅ {}", $msg)
    };
}

/// Logs an informational message with ℹ️ prefix at `info` level.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("ℹ️ {}", $msg)
    };
}

/// Logs a warning with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        tracing::warn!("⚠️ {}", $msg)
    };
}

/// Logs an error with ❌ prefix.
///
/// Errors are logged, never printed, so that a failed scheduled run or
/// request shows up in the same sink as the rest of the service output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        tracing::error!("❌ {}", $msg)
    };
}

/// Logs a debug message with 🔍 prefix.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("🔍 {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
