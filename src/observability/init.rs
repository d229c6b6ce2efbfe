//! Tracing subscriber setup.

use crate::TableConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global subscriber writing formatted events to stderr.
///
/// # Initialization Behavior
///
/// - `RUST_LOG` overrides `config.trace_level` when set and valid
/// - An unparseable level falls back to `"info"`
/// - Idempotent: only the first call in a process takes effect, and a
///   subscriber installed by the host is left in place
pub fn init_tracing(config: &TableConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.trace_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_ok() {
        tracing::debug!(trace_level = %config.trace_level, "tracing initialized");
    }
}
