//! # Reconciler
//!
//! Reconciliation planning for `KeycloakClient` resources.
//!
//! Given a KeycloakClient and a snapshot of what Keycloak currently holds for
//! it, the reconciler produces the list of actions that converges the two.
//! Planning is pure: it performs no I/O and never fails. Executing the plan is
//! the job of an [`ActionRunner`](crate::controller::runner::ActionRunner).

pub mod matcher;
pub mod reconcile;
pub mod roles;
pub mod secret;
pub mod types;
pub mod validation;

pub use matcher::{difference_intersection, has_matching_role, role_matches};
pub use reconcile::KeycloakClientReconciler;
pub use roles::reconcile_roles;
pub use secret::{client_secret, client_secret_name, reconciled_client_secret};
pub use types::{ClientState, ReconcilerError};
pub use validation::{validate_client, ValidationError};
