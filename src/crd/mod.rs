//! # Custom Resource Definitions
//!
//! CRD types for the Keycloak client reconciler.
//!
//! ## Module Structure
//!
//! - `spec.rs` - KeycloakClient specification and the client representation
//! - `role.rs` - Role representation shared by desired and observed state
//! - `status.rs` - Status types for tracking reconciliation state

mod role;
mod spec;
mod status;

// Re-export all public types
pub use role::RoleRepresentation;
pub use spec::{default_true, KeycloakApiClient, KeycloakClient, KeycloakClientSpec};
pub use status::{KeycloakClientStatus, Phase};
