//! Keycloak Client Reconciler Library
//!
//! Plans the actions that converge a Keycloak client, its credentials secret
//! and its client roles to a `KeycloakClient` custom resource, and executes
//! such plans through a pluggable transport.
//! Tests are included in the module files (e.g., controller/reconciler/roles.rs).
//!
//! ## Quick Start
//!
//! ```rust
//! use keycloak_client_reconciler::prelude::*;
//! ```
//!
//! This brings commonly used types and traits into scope. For more specific imports,
//! use the individual modules.

pub mod config;
pub mod constants;
pub mod controller;
pub mod crd;
pub mod observability;
pub mod prelude;
