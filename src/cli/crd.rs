//! # CRD Command
//!
//! Prints the KeycloakClient CustomResourceDefinition as YAML.

use anyhow::{Context, Result};
use keycloak_client_reconciler::crd::KeycloakClient;
use kube::core::CustomResourceExt;

pub fn crd_command() -> Result<()> {
    let crd = KeycloakClient::crd();
    let yaml = serde_yaml::to_string(&crd).context("Failed to serialize CRD to YAML")?;
    print!("{yaml}");
    Ok(())
}
