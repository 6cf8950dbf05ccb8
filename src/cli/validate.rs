//! # Validate Command
//!
//! Checks a KeycloakClient resource without planning.

use crate::plan::load_client;
use anyhow::{bail, Result};
use keycloak_client_reconciler::config::ReconcilerConfig;
use keycloak_client_reconciler::controller::reconciler::{validate_client, ReconcilerError};
use std::path::Path;

pub fn validate_command(config: &ReconcilerConfig, desired: &Path) -> Result<()> {
    let cr = load_client(desired)?;
    match validate_client(&cr, config) {
        Ok(()) => {
            println!(
                "✅ {} is valid ({} roles)",
                cr.display_name(),
                cr.spec.roles.len()
            );
            Ok(())
        }
        Err(e) => {
            let status = ReconcilerError::from(e).status();
            bail!(
                "❌ {} ({}): {}",
                desired.display(),
                status.phase.map_or_else(String::new, |p| p.to_string()),
                status.message.unwrap_or_default()
            )
        }
    }
}
