//! # Client Secret
//!
//! Builds the Kubernetes secret that exposes a client's credentials to workloads.

use crate::constants::{CLIENT_ID_KEY, CLIENT_SECRET_KEY, CLIENT_SECRET_NAME_PREFIX};
use crate::crd::KeycloakClient;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use std::collections::BTreeMap;

/// Name of the secret generated for `client_id`
#[must_use]
pub fn client_secret_name(client_id: &str) -> String {
    format!("{CLIENT_SECRET_NAME_PREFIX}{client_id}")
}

fn secret_data(cr: &KeycloakClient) -> BTreeMap<String, ByteString> {
    let client = &cr.spec.client;
    BTreeMap::from([
        (
            CLIENT_ID_KEY.to_string(),
            ByteString(client.client_id.clone().into_bytes()),
        ),
        (
            CLIENT_SECRET_KEY.to_string(),
            ByteString(client.secret.clone().unwrap_or_default().into_bytes()),
        ),
    ])
}

/// Fresh secret for a client that has none yet
#[must_use]
pub fn client_secret(cr: &KeycloakClient) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(client_secret_name(&cr.spec.client.client_id)),
            namespace: Some(cr.namespace_or_default().to_string()),
            labels: Some(BTreeMap::from([(
                "app".to_string(),
                "keycloak".to_string(),
            )])),
            ..ObjectMeta::default()
        },
        data: Some(secret_data(cr)),
        ..Secret::default()
    }
}

/// Existing secret with its credentials overwritten from the resource
///
/// Metadata of the observed secret (resource version, extra labels, annotations)
/// is preserved so the update applies cleanly.
#[must_use]
pub fn reconciled_client_secret(cr: &KeycloakClient, observed: &Secret) -> Secret {
    let mut secret = observed.clone();
    secret
        .data
        .get_or_insert_with(BTreeMap::new)
        .extend(secret_data(cr));
    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{KeycloakApiClient, KeycloakClientSpec};

    fn client(secret: Option<&str>) -> KeycloakClient {
        let mut cr = KeycloakClient::new(
            "billing",
            KeycloakClientSpec {
                realm: "payments".to_string(),
                client: KeycloakApiClient {
                    client_id: "billing-api".to_string(),
                    secret: secret.map(str::to_string),
                    ..KeycloakApiClient::default()
                },
                roles: Vec::new(),
            },
        );
        cr.metadata.namespace = Some("finance".to_string());
        cr
    }

    fn value(secret: &Secret, key: &str) -> String {
        let bytes = &secret.data.as_ref().expect("data")[key].0;
        String::from_utf8(bytes.clone()).expect("utf8")
    }

    #[test]
    fn test_fresh_secret_layout() {
        let secret = client_secret(&client(Some("s3cr3t")));
        assert_eq!(
            secret.metadata.name.as_deref(),
            Some("keycloak-client-secret-billing-api")
        );
        assert_eq!(secret.metadata.namespace.as_deref(), Some("finance"));
        assert_eq!(value(&secret, CLIENT_ID_KEY), "billing-api");
        assert_eq!(value(&secret, CLIENT_SECRET_KEY), "s3cr3t");
    }

    #[test]
    fn test_missing_secret_value_is_empty() {
        let secret = client_secret(&client(None));
        assert_eq!(value(&secret, CLIENT_SECRET_KEY), "");
    }

    #[test]
    fn test_reconciled_secret_keeps_metadata_and_extra_keys() {
        let mut observed = client_secret(&client(Some("old")));
        observed.metadata.resource_version = Some("42".to_string());
        observed
            .data
            .as_mut()
            .expect("data")
            .insert("EXTRA".to_string(), ByteString(b"keep".to_vec()));

        let secret = reconciled_client_secret(&client(Some("new")), &observed);
        assert_eq!(secret.metadata.resource_version.as_deref(), Some("42"));
        assert_eq!(value(&secret, CLIENT_SECRET_KEY), "new");
        assert_eq!(value(&secret, "EXTRA"), "keep");
    }
}
