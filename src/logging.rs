//! Tracing subscriber setup for the `srp` binary.
//!
//! Logs always go to stderr so they never mix with command output or the
//! terminal player's screen.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count, falling back to the configured level.
pub fn level_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins when set.
///
/// An invalid configured directive falls back to `warn` rather than
/// failing the command.
pub fn init(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = level_directive(verbose, configured);
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    });
    let fmt_layer = fmt::layer().with_writer(io::stderr).with_target(false);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
