//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "gtd=info,tower_http=info";

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (normally the
/// configured `log.filter`) is used. Calling this twice is harmless.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
}
