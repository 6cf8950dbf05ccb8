//! # Role Reconciliation
//!
//! Classifies every desired and observed client role into exactly one of
//! delete, create, update in place, or rename.
//!
//! ## Classification
//!
//! 1. Observed roles matching no desired role are deleted. A desired role that
//!    reuses a name but carries a different id does not save the observed role.
//! 2. Desired roles matched through their id are updates against the observed
//!    role with that id. When the names differ the observed name is vacated.
//! 3. Desired roles without an id that matched by name are recreations when
//!    their name was vacated in step 2, otherwise self-paired updates.
//! 4. Desired roles matching nothing are created.
//!
//! Step 2 completes before step 3 reads the vacated names, so the outcome does
//! not depend on the order roles are declared in.

use crate::controller::actions::{ClientContext, DesiredClusterState};
use crate::controller::reconciler::matcher::difference_intersection;
use crate::crd::RoleRepresentation;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Append the role actions converging `observed` to `desired_roles`
pub fn reconcile_roles(
    ctx: &ClientContext<'_>,
    desired_roles: &[RoleRepresentation],
    observed: &[RoleRepresentation],
    desired: &mut DesiredClusterState,
) {
    let (roles_deleted, _) = difference_intersection(observed, desired_roles);
    for role in roles_deleted {
        desired.add_action(ctx.delete_client_role(role));
    }

    let existing_by_id: HashMap<&str, &RoleRepresentation> = observed
        .iter()
        .filter(|r| r.has_id())
        .map(|r| (r.id.as_str(), r))
        .collect();

    let (roles_new, roles_matching) = difference_intersection(desired_roles, observed);
    let (with_id, without_id): (Vec<_>, Vec<_>) =
        roles_matching.into_iter().partition(|r| r.has_id());

    let mut vacated_names: HashSet<&str> = HashSet::new();
    for role in with_id {
        let old_role = match existing_by_id.get(role.id.as_str()) {
            Some(old_role) => *old_role,
            None => {
                // matched by name against an observed role without an id
                debug!(
                    "Role '{}' has id '{}' unknown to Keycloak but matched by name",
                    role.name, role.id
                );
                role
            }
        };
        if role.name != old_role.name {
            debug!("Role '{}' renamed to '{}'", old_role.name, role.name);
            vacated_names.insert(old_role.name.as_str());
        }
        desired.add_action(ctx.update_client_role(role, old_role));
    }

    for role in without_id {
        if vacated_names.contains(role.name.as_str()) {
            debug!(
                "Role name '{}' was vacated by a rename, creating a new role",
                role.name
            );
            desired.add_action(ctx.create_client_role(role));
        } else {
            desired.add_action(ctx.update_client_role(role, role));
        }
    }

    for role in roles_new {
        desired.add_action(ctx.create_client_role(role));
    }
}
