//! # CRD Validation Tests
//!
//! Tests that KeycloakClient resources and observed state snapshots
//! deserialize as expected, and that the generated CRD carries its schema.

use keycloak_client_reconciler::config::ReconcilerConfig;
use keycloak_client_reconciler::controller::actions::ActionKind;
use keycloak_client_reconciler::controller::reconciler::{
    validate_client, ClientState, KeycloakClientReconciler, ValidationError,
};
use keycloak_client_reconciler::crd::KeycloakClient;
use kube::core::CustomResourceExt;

const CLIENT_YAML: &str = r#"
apiVersion: keycloak.org/v1alpha1
kind: KeycloakClient
metadata:
  name: billing-api
  namespace: payments
spec:
  realm: payments
  client:
    clientId: billing-api
    secret: s3cr3t
    publicClient: false
    redirectUris:
      - https://billing.example.com/callback
  roles:
    - name: invoice-reader
      description: Read invoices
    - id: 6f1c7f1e-2a9e-4c55-9a0b-53c0d3f4a1b2
      name: invoice-admin
      composite: true
      attributes:
        team: ["finance"]
"#;

const OBSERVED_YAML: &str = r#"
realm: payments
client:
  id: 0d9b1c2e
  clientId: billing-api
clientSecret:
  apiVersion: v1
  kind: Secret
  metadata:
    name: keycloak-client-secret-billing-api
    namespace: payments
    resourceVersion: "17"
  data:
    CLIENT_ID: YmlsbGluZy1hcGk=
    CLIENT_SECRET: b2xk
roles:
  - id: 6f1c7f1e-2a9e-4c55-9a0b-53c0d3f4a1b2
    name: invoice-superuser
  - id: 11111111-0000-0000-0000-000000000000
    name: invoice-reader
  - id: 22222222-0000-0000-0000-000000000000
    name: legacy
"#;

#[test]
fn test_client_deserializes_with_defaults() {
    let cr: KeycloakClient =
        serde_yaml::from_str(CLIENT_YAML).expect("Should deserialize KeycloakClient");

    assert_eq!(cr.metadata.name.as_deref(), Some("billing-api"));
    assert_eq!(cr.spec.realm, "payments");
    assert_eq!(cr.spec.client.client_id, "billing-api");
    assert_eq!(cr.spec.client.secret.as_deref(), Some("s3cr3t"));
    assert!(cr.spec.client.enabled, "enabled defaults to true");
    assert_eq!(cr.spec.client.redirect_uris.len(), 1);
    assert!(!cr.is_being_deleted());

    assert_eq!(cr.spec.roles.len(), 2);
    assert!(cr.spec.roles[0].id.is_empty(), "id defaults to empty");
    assert_eq!(cr.spec.roles[0].description.as_deref(), Some("Read invoices"));
    assert!(cr.spec.roles[1].composite);
    assert_eq!(cr.spec.roles[1].attributes["team"], vec!["finance".to_string()]);
}

#[test]
fn test_roles_default_to_empty() {
    let yaml = r#"
apiVersion: keycloak.org/v1alpha1
kind: KeycloakClient
metadata:
  name: bare
spec:
  realm: main
  client:
    clientId: bare
"#;
    let cr: KeycloakClient = serde_yaml::from_str(yaml).expect("Should deserialize");
    assert!(cr.spec.roles.is_empty());
    assert_eq!(cr.display_name(), "default/bare");
    assert_eq!(validate_client(&cr, &ReconcilerConfig::default()), Ok(()));
}

#[test]
fn test_deletion_timestamp_is_recognised() {
    let yaml = r#"
apiVersion: keycloak.org/v1alpha1
kind: KeycloakClient
metadata:
  name: leaving
  namespace: payments
  deletionTimestamp: "2024-05-01T12:00:00Z"
spec:
  realm: payments
  client:
    clientId: leaving
  roles:
    - name: reader
"#;
    let cr: KeycloakClient = serde_yaml::from_str(yaml).expect("Should deserialize");
    assert!(cr.is_being_deleted());

    let plan = KeycloakClientReconciler::new().reconcile(&ClientState::default(), &cr);
    let kinds: Vec<ActionKind> = plan.iter().map(|a| a.kind()).collect();
    assert_eq!(kinds, vec![ActionKind::Ping, ActionKind::DeleteClient]);
}

#[test]
fn test_duplicate_role_names_rejected() {
    let yaml = r#"
apiVersion: keycloak.org/v1alpha1
kind: KeycloakClient
metadata:
  name: dup
spec:
  realm: main
  client:
    clientId: dup
  roles:
    - name: reader
    - name: reader
"#;
    let cr: KeycloakClient = serde_yaml::from_str(yaml).expect("Should deserialize");
    assert_eq!(
        validate_client(&cr, &ReconcilerConfig::default()),
        Err(ValidationError::DuplicateRoleName {
            name: "reader".to_string()
        })
    );
}

#[test]
fn test_observed_state_plan() {
    let cr: KeycloakClient = serde_yaml::from_str(CLIENT_YAML).expect("client");
    let state: ClientState = serde_yaml::from_str(OBSERVED_YAML).expect("observed state");
    assert_eq!(state.realm, "payments");
    assert_eq!(state.roles.len(), 3);
    assert!(state.client.is_some());

    let plan = KeycloakClientReconciler::new().reconcile(&state, &cr);
    assert_eq!(
        plan.canonical_keys(),
        vec![
            (ActionKind::Ping, "keycloak".to_string()),
            (ActionKind::UpdateClient, "billing-api".to_string()),
            (
                ActionKind::UpdateClientSecret,
                "keycloak-client-secret-billing-api".to_string()
            ),
            (ActionKind::UpdateClientRole, "invoice-admin".to_string()),
            (ActionKind::UpdateClientRole, "invoice-reader".to_string()),
            (ActionKind::DeleteClientRole, "legacy".to_string()),
        ]
    );
    assert_eq!(plan.summary().renames, 1);
}

#[test]
fn test_observed_state_accepts_json() {
    let json = r#"{"roles": [{"id": "1", "name": "a"}]}"#;
    let state: ClientState = serde_yaml::from_str(json).expect("JSON is valid YAML");
    assert!(state.realm.is_empty());
    assert!(state.client.is_none());
    assert!(state.client_secret.is_none());
    assert_eq!(state.roles[0].id, "1");
}

#[test]
fn test_generated_crd() {
    let crd = KeycloakClient::crd();
    assert_eq!(crd.spec.group, "keycloak.org");
    assert_eq!(crd.spec.names.kind, "KeycloakClient");
    assert_eq!(crd.spec.versions[0].name, "v1alpha1");
    assert!(crd.spec.versions[0].schema.is_some());

    let yaml = serde_yaml::to_string(&crd).expect("CRD serializes");
    assert!(yaml.contains("clientId"));
    assert!(yaml.contains("roles"));
}
