//! # KeycloakClient Spec
//!
//! Main CRD specification types and default values.

use serde::{Deserialize, Serialize};

/// KeycloakClient Custom Resource Definition
///
/// Declares a client registration in a Keycloak realm together with the
/// client roles that should exist on it.
///
/// # Example
///
/// ```yaml
/// apiVersion: keycloak.org/v1alpha1
/// kind: KeycloakClient
/// metadata:
///   name: billing-api
///   namespace: payments
/// spec:
///   realm: payments
///   client:
///     clientId: billing-api
///     secret: s3cr3t
///   roles:
///     - name: invoice-reader
///     - id: 6f1c7f1e-2a9e-4c55-9a0b-53c0d3f4a1b2
///       name: invoice-admin
/// ```
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "KeycloakClient",
    group = "keycloak.org",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::KeycloakClientStatus",
    shortname = "kcc",
    printcolumn = r#"{"name":"Phase", "type":"string", "jsonPath":".status.phase"}, {"name":"Ready", "type":"boolean", "jsonPath":".status.ready"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakClientSpec {
    /// Realm the client is registered in
    /// Carried into every action for context; the realm itself is not managed here
    pub realm: String,
    /// Client registration
    pub client: KeycloakApiClient,
    /// Client roles
    /// Names must be unique; an `id` pins a role to an existing Keycloak role so renames
    /// update it in place instead of deleting and recreating it
    #[serde(default)]
    pub roles: Vec<crate::crd::RoleRepresentation>,
}

/// Client representation as understood by the Keycloak admin API
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakApiClient {
    /// Keycloak-internal id, empty until Keycloak assigns one
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Client id used in OAuth flows
    pub client_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Client secret, copied into the generated Kubernetes secret
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub public_client: bool,
    #[serde(default)]
    pub root_url: Option<String>,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

impl KeycloakClient {
    /// Namespace of the resource, `default` when unset
    #[must_use]
    pub fn namespace_or_default(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or("default")
    }

    /// Whether Kubernetes has marked this resource for deletion
    #[must_use]
    pub fn is_being_deleted(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
    }

    /// `namespace/clientId`, used in action messages and logs
    #[must_use]
    pub fn display_name(&self) -> String {
        format!(
            "{}/{}",
            self.namespace_or_default(),
            self.spec.client.client_id
        )
    }
}

/// Default value for boolean true
#[must_use]
pub fn default_true() -> bool {
    true
}
