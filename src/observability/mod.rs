//! # Observability
//!
//! - `logging`: tracing subscriber setup
//! - `metrics`: Prometheus metrics collection

pub mod logging;
pub mod metrics;

// Re-export for convenience
pub use logging::*;
pub use metrics::*;
