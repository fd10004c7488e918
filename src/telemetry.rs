//! Tracing subscriber setup
//!
//! Filters come from `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].

use crate::core::error::{MicromuseError, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "micromuse=info";

/// Install the global fmt subscriber, filtered by `RUST_LOG`
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Install the global fmt subscriber with explicit filter directives
pub fn init_with_filter(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| MicromuseError::Telemetry(format!("invalid filter '{directives}': {e}")))?;
    install(filter)
}

fn install(filter: EnvFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| MicromuseError::Telemetry(e.to_string()))?;

    tracing::info!("Tracing initialised");
    Ok(())
}
