//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use keycloak_client_reconciler::prelude::*;
//! ```
//!
//! This brings into scope:
//! - All CRD types (KeycloakClient, RoleRepresentation, etc.)
//! - Plan types (ClusterAction, DesiredClusterState, etc.)
//! - Reconciler types (KeycloakClientReconciler, ClientState, ReconcilerError)
//! - The ActionRunner trait
//! - Config types

// CRD types - most commonly used
pub use crate::crd::*;

// Plan types
pub use crate::controller::actions::{
    ActionKind, ClusterAction, DesiredClusterState, PlanEntry, PlanSummary,
};

// Reconciler types - core planning functionality
pub use crate::controller::reconciler::{
    validate_client, ClientState, KeycloakClientReconciler, ReconcilerError, ValidationError,
};

// Runner trait - needed for implementing transports
pub use crate::controller::runner::{ActionFailure, ActionRunner, ExecutionReport};

// Config types
pub use crate::config::{LogFormat, ReconcilerConfig};
