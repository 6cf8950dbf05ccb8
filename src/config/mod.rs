//! # Configuration
//!
//! Reconciler-level settings loaded from environment variables.

mod reconciler;

pub use reconciler::{LogFormat, ReconcilerConfig};
