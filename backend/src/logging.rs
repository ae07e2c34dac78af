use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Build the log filter. `RUST_LOG` wins over the configured directives.
pub fn build_filter(settings: &LogSettings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.filter)
            .map_err(|e| anyhow!("Invalid log filter '{}': {}", settings.filter, e)),
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(settings: &LogSettings) -> Result<()> {
    let filter = build_filter(settings)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
