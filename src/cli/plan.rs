//! # Plan Command
//!
//! Computes and prints the reconciliation plan for a KeycloakClient.

use crate::OutputFormat;
use anyhow::{Context, Result};
use keycloak_client_reconciler::config::ReconcilerConfig;
use keycloak_client_reconciler::controller::reconciler::{
    validate_client, ClientState, KeycloakClientReconciler, ReconcilerError,
};
use keycloak_client_reconciler::crd::KeycloakClient;
use keycloak_client_reconciler::observability;
use std::path::Path;
use tracing::{info, warn};

/// Read a KeycloakClient resource from a YAML file
pub fn load_client(path: &Path) -> Result<KeycloakClient> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse KeycloakClient from {}", path.display()))
}

/// Read an observed state snapshot; YAML and JSON are both accepted
fn load_state(path: &Path) -> Result<ClientState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse observed state from {}", path.display()))
}

pub fn plan_command(
    config: &ReconcilerConfig,
    desired: &Path,
    observed: Option<&Path>,
    output: OutputFormat,
    skip_validation: bool,
) -> Result<()> {
    let cr = load_client(desired)?;

    if let Err(e) = validate_client(&cr, config) {
        let err = ReconcilerError::from(e);
        if !skip_validation {
            return Err(err).with_context(|| format!("Refusing to plan {}", desired.display()));
        }
        warn!("Planning despite {}", err);
    }

    let state = match observed {
        Some(path) => load_state(path)?,
        None => ClientState::default(),
    };

    let plan = KeycloakClientReconciler::new().reconcile(&state, &cr);
    if config.enable_metrics {
        observability::record_plan(&plan);
    }
    info!("Planned {} actions for {}", plan.len(), cr.display_name());

    match output {
        OutputFormat::Text => {
            println!("Plan for KeycloakClient {}:", cr.display_name());
            for (i, entry) in plan.entries().iter().enumerate() {
                println!("  {:>3}. {:<22} {}", i + 1, entry.kind.as_str(), entry.msg);
            }
            println!("\n{}", plan.summary());
        }
        OutputFormat::Json => {
            let rendered = serde_json::json!({
                "client": cr.display_name(),
                "actions": plan.entries(),
                "summary": plan.summary(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&rendered).context("Failed to render plan")?
            );
        }
    }

    Ok(())
}
