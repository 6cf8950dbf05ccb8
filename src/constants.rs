//! # Constants
//!
//! Shared constants used throughout the reconciler.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Message attached to the availability check that precedes every plan
pub const PING_MESSAGE: &str = "check if keycloak is available";

/// Name prefix of the Kubernetes secret holding a client's credentials
/// Full name: `keycloak-client-secret-{clientId}`
pub const CLIENT_SECRET_NAME_PREFIX: &str = "keycloak-client-secret-";

/// Secret data key holding the client id
pub const CLIENT_ID_KEY: &str = "CLIENT_ID";

/// Secret data key holding the client secret
pub const CLIENT_SECRET_KEY: &str = "CLIENT_SECRET";

/// Default upper bound on roles declared by a single KeycloakClient
/// Roles are human-authored, anything above this is almost certainly a mistake
pub const DEFAULT_MAX_ROLES_PER_CLIENT: usize = 500;

/// Default tracing filter when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_FILTER: &str = "keycloak_client_reconciler=info";
