//! Common fixtures for integration tests

#![allow(dead_code)]

use keycloak_client_reconciler::controller::reconciler::ClientState;
use keycloak_client_reconciler::crd::{
    KeycloakApiClient, KeycloakClient, KeycloakClientSpec, RoleRepresentation,
};

/// KeycloakClient `app` in namespace `team`, realm `main`, with the given roles
pub fn client_with_roles(roles: Vec<RoleRepresentation>) -> KeycloakClient {
    let mut cr = KeycloakClient::new(
        "app",
        KeycloakClientSpec {
            realm: "main".to_string(),
            client: KeycloakApiClient {
                client_id: "app".to_string(),
                secret: Some("s3cr3t".to_string()),
                ..KeycloakApiClient::default()
            },
            roles,
        },
    );
    cr.metadata.namespace = Some("team".to_string());
    cr
}

/// Observed state where the client and its secret already exist
pub fn existing_state(roles: Vec<RoleRepresentation>) -> ClientState {
    let cr = client_with_roles(Vec::new());
    ClientState {
        realm: cr.spec.realm.clone(),
        client: Some(cr.spec.client.clone()),
        client_secret: Some(
            keycloak_client_reconciler::controller::reconciler::client_secret(&cr),
        ),
        roles,
    }
}

pub fn role(id: &str, name: &str) -> RoleRepresentation {
    RoleRepresentation::with_id(id, name)
}

pub fn named(name: &str) -> RoleRepresentation {
    RoleRepresentation::named(name)
}
