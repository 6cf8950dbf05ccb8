//! # Reconciler Configuration
//!
//! Settings that shape logging, metrics, validation and plan execution.

use crate::constants::DEFAULT_MAX_ROLES_PER_CLIENT;

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name, falling back to text for anything unknown
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Reconciler-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    /// Ignored when `RUST_LOG` is set
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: LogFormat,
    /// Enable color in text format logs
    pub log_enable_color: bool,
    /// Enable metrics collection
    pub enable_metrics: bool,
    /// Stop executing a plan when the availability check fails
    /// When false, mutating actions are still attempted (and will most likely fail individually)
    pub abort_on_unavailable: bool,
    /// Maximum roles per KeycloakClient
    /// Enforced by validation
    pub max_roles_per_client: usize,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
            log_format: LogFormat::Text,
            log_enable_color: false,
            enable_metrics: true,
            abort_on_unavailable: true,
            max_roles_per_client: DEFAULT_MAX_ROLES_PER_CLIENT,
        }
    }
}

impl ReconcilerConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the process environment.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
            log_enable_color: parse_bool(lookup("LOG_ENABLE_COLOR"), defaults.log_enable_color),
            enable_metrics: parse_bool(lookup("ENABLE_METRICS"), defaults.enable_metrics),
            abort_on_unavailable: parse_bool(
                lookup("ABORT_ON_UNAVAILABLE"),
                defaults.abort_on_unavailable,
            ),
            max_roles_per_client: lookup("MAX_ROLES_PER_CLIENT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_roles_per_client),
        }
    }
}

/// Interpret a boolean-ish environment value or return default
fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| {
            let v_lower = v.to_lowercase();
            v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
        })
        .unwrap_or(default)
}
