//! # Types
//!
//! Core types for the reconciler.

use crate::controller::reconciler::validation::ValidationError;
use crate::crd::{KeycloakApiClient, RoleRepresentation};
use k8s_openapi::api::core::v1::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcilerError {
    /// The availability check failed; no mutating action was attempted
    #[error("Keycloak is unavailable: {0}")]
    KeycloakUnavailable(String),
    #[error("Invalid KeycloakClient: {0}")]
    Validation(#[from] ValidationError),
}

/// Snapshot of what currently exists for one client
///
/// Fetched fresh before every pass; never cached between passes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    /// Realm the client lives in as reported by Keycloak, empty when unknown
    #[serde(default)]
    pub realm: String,
    /// Client as registered in Keycloak, `None` when it does not exist yet
    #[serde(default)]
    pub client: Option<KeycloakApiClient>,
    /// Credentials secret in Kubernetes, `None` when it does not exist yet
    #[serde(default)]
    pub client_secret: Option<Secret>,
    /// Client roles as registered in Keycloak
    #[serde(default)]
    pub roles: Vec<RoleRepresentation>,
}
