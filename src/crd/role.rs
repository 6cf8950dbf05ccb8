//! # Role Representation
//!
//! A client role, used both for the desired roles in a KeycloakClient spec and
//! for the roles observed in Keycloak.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Client role
///
/// Observed roles always carry the `id` Keycloak assigned. Desired roles may leave it
/// empty, in which case they are matched to observed roles by `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleRepresentation {
    /// Keycloak role id, empty when not yet known
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub composite: bool,
    #[serde(default)]
    pub client_role: bool,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, Vec<String>>,
}

impl RoleRepresentation {
    /// Role matched by name only
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Role pinned to a Keycloak id
    #[must_use]
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}
