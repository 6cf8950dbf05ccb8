//! # Reconcile
//!
//! Plans the actions that converge Keycloak and the credentials secret to a
//! KeycloakClient resource.
//!
//! ## Plan Layout
//!
//! 1. Availability check (always)
//! 2. Resource marked for deletion: delete the client and stop. Keycloak
//!    removes the client's roles with it.
//! 3. Create or update the client
//! 4. Create or update the credentials secret
//! 5. Role actions, see [`reconcile_roles`]

use crate::controller::actions::{ClientContext, DesiredClusterState};
use crate::controller::reconciler::roles::reconcile_roles;
use crate::controller::reconciler::secret::{client_secret, reconciled_client_secret};
use crate::controller::reconciler::types::ClientState;
use crate::crd::KeycloakClient;
use tracing::{debug, info_span};

/// Plans reconciliation passes for KeycloakClient resources
///
/// Holds no state: every call plans from its arguments alone, so one reconciler
/// can serve any number of clients concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeycloakClientReconciler;

impl KeycloakClientReconciler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Plan the actions converging `state` to `cr`
    #[must_use]
    pub fn reconcile(&self, state: &ClientState, cr: &KeycloakClient) -> DesiredClusterState {
        let span = info_span!(
            "reconciler.plan",
            resource.name = cr.metadata.name.as_deref().unwrap_or("unknown"),
            resource.namespace = cr.namespace_or_default(),
            client.id = %cr.spec.client.client_id,
        );
        let _guard = span.enter();

        let ctx = ClientContext::new(state, cr);
        let mut desired = DesiredClusterState::new();

        desired.add_action(ctx.ping());
        if cr.is_being_deleted() {
            debug!("Resource marked for deletion, planning client removal only");
            desired.add_action(ctx.delete_client());
            return desired;
        }

        match state.client {
            None => desired.add_action(ctx.create_client()),
            Some(_) => desired.add_action(ctx.update_client()),
        }

        match &state.client_secret {
            None => desired.add_action(ctx.create_client_secret(client_secret(cr))),
            Some(observed) => desired.add_action(
                ctx.update_client_secret(reconciled_client_secret(cr, observed)),
            ),
        }

        self.reconcile_roles(state, cr, &mut desired);

        debug!("Planned {} actions: {}", desired.len(), desired.summary());
        desired
    }

    /// Append the role actions for `cr` to `desired`
    pub fn reconcile_roles(
        &self,
        state: &ClientState,
        cr: &KeycloakClient,
        desired: &mut DesiredClusterState,
    ) {
        let ctx = ClientContext::new(state, cr);
        reconcile_roles(&ctx, &cr.spec.roles, &state.roles, desired);
    }
}
