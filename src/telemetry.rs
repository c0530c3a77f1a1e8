//! Tracing initialisation shared by both binaries.
//!
//! Diagnostics go to stderr so they never mix with the report lines the
//! tools print on stdout.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default verbosity when `RUST_LOG` is not set.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Initialise the global tracing subscriber.
///
/// Respects `RUST_LOG`; falls back to `level` otherwise. Only the first
/// call in a process takes effect.
pub fn init_tracing(level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing(DEFAULT_LEVEL);
        init_tracing(Level::DEBUG);
        tracing::debug!("still running");
    }
}
