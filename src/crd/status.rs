//! # KeycloakClient Status
//!
//! Status types for tracking reconciliation state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reconciliation phase of a KeycloakClient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub enum Phase {
    /// Every planned action was applied
    Reconciled,
    /// Keycloak answered but at least one action failed
    Failing,
    /// The availability check failed, nothing was applied
    Unavailable,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Reconciled => "reconciled",
            Phase::Failing => "failing",
            Phase::Unavailable => "unavailable",
        };
        f.write_str(s)
    }
}

/// Status of the KeycloakClient resource
#[derive(Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakClientStatus {
    #[serde(default)]
    pub phase: Option<Phase>,
    /// Human-readable description of the last pass
    #[serde(default)]
    pub message: Option<String>,
    /// True when the last pass applied every action
    #[serde(default)]
    pub ready: bool,
    /// Name of the Kubernetes secret holding the client credentials
    #[serde(default)]
    pub secret_name: Option<String>,
}
