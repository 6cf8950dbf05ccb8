//! # Validation
//!
//! Checks the invariants role classification relies on but does not verify
//! itself: unique role names and unique role ids within a KeycloakClient.

use crate::config::ReconcilerConfig;
use crate::crd::KeycloakClient;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("spec.client.clientId must not be empty")]
    EmptyClientId,
    #[error("spec.realm must not be empty")]
    EmptyRealm,
    #[error("role at index {index} has an empty name")]
    EmptyRoleName { index: usize },
    #[error("role name '{name}' is declared more than once")]
    DuplicateRoleName { name: String },
    #[error("role id '{id}' is claimed by both '{first}' and '{second}'")]
    DuplicateRoleId {
        id: String,
        first: String,
        second: String,
    },
    #[error("{count} roles declared, at most {max} allowed")]
    TooManyRoles { count: usize, max: usize },
}

/// Validate a KeycloakClient before planning
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_client(
    cr: &KeycloakClient,
    config: &ReconcilerConfig,
) -> Result<(), ValidationError> {
    if cr.spec.client.client_id.trim().is_empty() {
        return Err(ValidationError::EmptyClientId);
    }
    if cr.spec.realm.trim().is_empty() {
        return Err(ValidationError::EmptyRealm);
    }

    let roles = &cr.spec.roles;
    if roles.len() > config.max_roles_per_client {
        return Err(ValidationError::TooManyRoles {
            count: roles.len(),
            max: config.max_roles_per_client,
        });
    }

    let mut names: HashMap<&str, usize> = HashMap::with_capacity(roles.len());
    let mut ids: HashMap<&str, &str> = HashMap::new();
    for (index, role) in roles.iter().enumerate() {
        if role.name.trim().is_empty() {
            return Err(ValidationError::EmptyRoleName { index });
        }
        if names.insert(role.name.as_str(), index).is_some() {
            return Err(ValidationError::DuplicateRoleName {
                name: role.name.clone(),
            });
        }
        if role.has_id() {
            if let Some(first) = ids.insert(role.id.as_str(), role.name.as_str()) {
                return Err(ValidationError::DuplicateRoleId {
                    id: role.id.clone(),
                    first: first.to_string(),
                    second: role.name.clone(),
                });
            }
        }
    }

    Ok(())
}
