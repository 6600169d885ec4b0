//! Logging for httperr
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! stderr fmt layer, so stdout stays reserved for command output.

use httperr_config::{LogConfig, LogFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Fallback directive when the configured one cannot be parsed
const FALLBACK_FILTER: &str = "warn";

/// Build the filter for `config`, honouring `RUST_LOG` when set
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|e| {
            eprintln!("invalid log filter {:?}: {e}; using {FALLBACK_FILTER}", config.filter);
            EnvFilter::new(FALLBACK_FILTER)
        })
}

/// Initialize the global subscriber from configuration
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = build_filter(config);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "logging initialized");
    Ok(())
}
