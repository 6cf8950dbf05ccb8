//! # Logging
//!
//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise `LOG_LEVEL` from the configuration
//! applies to this crate only.

use crate::config::{LogFormat, ReconcilerConfig};
use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for a configuration, preferring `RUST_LOG` when set
#[must_use]
pub fn env_filter(config: &ReconcilerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = format!(
            "keycloak_client_reconciler={}",
            config.log_level.to_lowercase()
        );
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    })
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Fails when a subscriber is already installed.
pub fn init_tracing(config: &ReconcilerConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}")),
        LogFormat::Text => builder
            .with_ansi(config.log_enable_color)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}")),
    }
}
