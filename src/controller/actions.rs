//! # Cluster Actions
//!
//! The plan produced by a reconciliation pass.
//!
//! Every action owns its payload: roles, the client resource and the secret
//! are cloned when the action is built, so a plan stays valid no matter what
//! happens to the collections it was computed from.

use crate::constants::PING_MESSAGE;
use crate::controller::reconciler::ClientState;
use crate::crd::{KeycloakClient, RoleRepresentation};
use k8s_openapi::api::core::v1::Secret;
use serde::Serialize;
use std::fmt;

/// Kind of a [`ClusterAction`], ordered for canonical comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Ping,
    CreateClient,
    UpdateClient,
    DeleteClient,
    CreateClientSecret,
    UpdateClientSecret,
    CreateClientRole,
    UpdateClientRole,
    DeleteClientRole,
}

impl ActionKind {
    /// Stable label, used for metrics and plan output
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Ping => "ping",
            ActionKind::CreateClient => "create-client",
            ActionKind::UpdateClient => "update-client",
            ActionKind::DeleteClient => "delete-client",
            ActionKind::CreateClientSecret => "create-client-secret",
            ActionKind::UpdateClientSecret => "update-client-secret",
            ActionKind::CreateClientRole => "create-client-role",
            ActionKind::UpdateClientRole => "update-client-role",
            ActionKind::DeleteClientRole => "delete-client-role",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intended operation against Keycloak or the Kubernetes secret store
#[derive(Debug, Clone)]
pub enum ClusterAction {
    /// Availability check, always the first action of a plan
    Ping { msg: String },
    CreateClient {
        client: Box<KeycloakClient>,
        realm: String,
        msg: String,
    },
    UpdateClient {
        client: Box<KeycloakClient>,
        realm: String,
        msg: String,
    },
    /// Removes the client; Keycloak drops its roles with it
    DeleteClient {
        client: Box<KeycloakClient>,
        realm: String,
        msg: String,
    },
    CreateClientSecret { secret: Box<Secret>, msg: String },
    UpdateClientSecret { secret: Box<Secret>, msg: String },
    CreateClientRole {
        role: RoleRepresentation,
        client_id: String,
        realm: String,
        msg: String,
    },
    /// `old_role` is the role as Keycloak knows it; its name differs from `role.name` on renames
    UpdateClientRole {
        role: RoleRepresentation,
        old_role: RoleRepresentation,
        client_id: String,
        realm: String,
        msg: String,
    },
    DeleteClientRole {
        role: RoleRepresentation,
        client_id: String,
        realm: String,
        msg: String,
    },
}

impl ClusterAction {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            ClusterAction::Ping { .. } => ActionKind::Ping,
            ClusterAction::CreateClient { .. } => ActionKind::CreateClient,
            ClusterAction::UpdateClient { .. } => ActionKind::UpdateClient,
            ClusterAction::DeleteClient { .. } => ActionKind::DeleteClient,
            ClusterAction::CreateClientSecret { .. } => ActionKind::CreateClientSecret,
            ClusterAction::UpdateClientSecret { .. } => ActionKind::UpdateClientSecret,
            ClusterAction::CreateClientRole { .. } => ActionKind::CreateClientRole,
            ClusterAction::UpdateClientRole { .. } => ActionKind::UpdateClientRole,
            ClusterAction::DeleteClientRole { .. } => ActionKind::DeleteClientRole,
        }
    }

    /// Human-readable description
    #[must_use]
    pub fn msg(&self) -> &str {
        match self {
            ClusterAction::Ping { msg }
            | ClusterAction::CreateClient { msg, .. }
            | ClusterAction::UpdateClient { msg, .. }
            | ClusterAction::DeleteClient { msg, .. }
            | ClusterAction::CreateClientSecret { msg, .. }
            | ClusterAction::UpdateClientSecret { msg, .. }
            | ClusterAction::CreateClientRole { msg, .. }
            | ClusterAction::UpdateClientRole { msg, .. }
            | ClusterAction::DeleteClientRole { msg, .. } => msg,
        }
    }

    /// Name of the entity the action operates on
    ///
    /// Role updates report the new name, so a rename is keyed by where the role ends up.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            ClusterAction::Ping { .. } => "keycloak",
            ClusterAction::CreateClient { client, .. }
            | ClusterAction::UpdateClient { client, .. }
            | ClusterAction::DeleteClient { client, .. } => &client.spec.client.client_id,
            ClusterAction::CreateClientSecret { secret, .. }
            | ClusterAction::UpdateClientSecret { secret, .. } => {
                secret.metadata.name.as_deref().unwrap_or_default()
            }
            ClusterAction::CreateClientRole { role, .. }
            | ClusterAction::UpdateClientRole { role, .. }
            | ClusterAction::DeleteClientRole { role, .. } => &role.name,
        }
    }

    /// Whether executing the action changes remote state
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        !matches!(self, ClusterAction::Ping { .. })
    }

    /// Whether this is a role update that changes the role's name
    #[must_use]
    pub fn is_rename(&self) -> bool {
        matches!(self, ClusterAction::UpdateClientRole { role, old_role, .. } if role.name != old_role.name)
    }
}

impl fmt::Display for ClusterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind(), self.msg())
    }
}

/// Everything an action builder needs to know about the client being reconciled
#[derive(Debug, Clone, Copy)]
pub struct ClientContext<'a> {
    pub cr: &'a KeycloakClient,
    pub realm: &'a str,
}

impl<'a> ClientContext<'a> {
    /// Context for planning `cr` against `state`
    ///
    /// Actions target the realm Keycloak reports; `spec.realm` is used until one is observed.
    #[must_use]
    pub fn new(state: &'a ClientState, cr: &'a KeycloakClient) -> Self {
        let realm = if state.realm.is_empty() {
            cr.spec.realm.as_str()
        } else {
            state.realm.as_str()
        };
        Self { cr, realm }
    }

    fn client_id(&self) -> &'a str {
        &self.cr.spec.client.client_id
    }

    #[must_use]
    pub fn ping(&self) -> ClusterAction {
        ClusterAction::Ping {
            msg: PING_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn create_client(&self) -> ClusterAction {
        ClusterAction::CreateClient {
            client: Box::new(self.cr.clone()),
            realm: self.realm.to_string(),
            msg: format!("create client {}", self.cr.display_name()),
        }
    }

    #[must_use]
    pub fn update_client(&self) -> ClusterAction {
        ClusterAction::UpdateClient {
            client: Box::new(self.cr.clone()),
            realm: self.realm.to_string(),
            msg: format!("update client {}", self.cr.display_name()),
        }
    }

    #[must_use]
    pub fn delete_client(&self) -> ClusterAction {
        ClusterAction::DeleteClient {
            client: Box::new(self.cr.clone()),
            realm: self.realm.to_string(),
            msg: format!("removing client {}", self.cr.display_name()),
        }
    }

    #[must_use]
    pub fn create_client_secret(&self, secret: Secret) -> ClusterAction {
        ClusterAction::CreateClientSecret {
            secret: Box::new(secret),
            msg: format!("create client secret {}", self.cr.display_name()),
        }
    }

    #[must_use]
    pub fn update_client_secret(&self, secret: Secret) -> ClusterAction {
        ClusterAction::UpdateClientSecret {
            secret: Box::new(secret),
            msg: format!("update client secret {}", self.cr.display_name()),
        }
    }

    #[must_use]
    pub fn create_client_role(&self, role: &RoleRepresentation) -> ClusterAction {
        ClusterAction::CreateClientRole {
            role: role.clone(),
            client_id: self.client_id().to_string(),
            realm: self.realm.to_string(),
            msg: format!("create client role {}/{}", self.cr.display_name(), role.name),
        }
    }

    #[must_use]
    pub fn update_client_role(
        &self,
        role: &RoleRepresentation,
        old_role: &RoleRepresentation,
    ) -> ClusterAction {
        ClusterAction::UpdateClientRole {
            role: role.clone(),
            old_role: old_role.clone(),
            client_id: self.client_id().to_string(),
            realm: self.realm.to_string(),
            msg: format!(
                "update client role {}/{}",
                self.cr.display_name(),
                old_role.name
            ),
        }
    }

    #[must_use]
    pub fn delete_client_role(&self, role: &RoleRepresentation) -> ClusterAction {
        ClusterAction::DeleteClientRole {
            role: role.clone(),
            client_id: self.client_id().to_string(),
            realm: self.realm.to_string(),
            msg: format!("delete client role {}/{}", self.cr.display_name(), role.name),
        }
    }
}

/// Counts of planned actions by effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub pings: usize,
    pub creates: usize,
    pub updates: usize,
    pub deletes: usize,
    /// Role updates that change a role's name (also counted in `updates`)
    pub renames: usize,
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to create, {} to update ({} renames), {} to delete",
            self.creates, self.updates, self.renames, self.deletes
        )
    }
}

/// One line of a rendered plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub kind: ActionKind,
    pub target: String,
    pub msg: String,
}

/// Ordered list of actions that converges Keycloak to a KeycloakClient
#[derive(Debug, Clone, Default)]
pub struct DesiredClusterState {
    actions: Vec<ClusterAction>,
}

impl DesiredClusterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_action(&mut self, action: ClusterAction) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn actions(&self) -> &[ClusterAction] {
        &self.actions
    }

    #[must_use]
    pub fn into_actions(self) -> Vec<ClusterAction> {
        self.actions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, ClusterAction> {
        self.actions.iter()
    }

    /// Actions of one kind, in plan order
    pub fn of_kind(&self, kind: ActionKind) -> impl Iterator<Item = &ClusterAction> {
        self.actions.iter().filter(move |a| a.kind() == kind)
    }

    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        let mut summary = PlanSummary::default();
        for action in &self.actions {
            match action.kind() {
                ActionKind::Ping => summary.pings += 1,
                ActionKind::CreateClient
                | ActionKind::CreateClientSecret
                | ActionKind::CreateClientRole => summary.creates += 1,
                ActionKind::UpdateClient
                | ActionKind::UpdateClientSecret
                | ActionKind::UpdateClientRole => summary.updates += 1,
                ActionKind::DeleteClient | ActionKind::DeleteClientRole => summary.deletes += 1,
            }
            if action.is_rename() {
                summary.renames += 1;
            }
        }
        summary
    }

    /// `(kind, target)` pairs sorted, for order-insensitive plan comparison
    #[must_use]
    pub fn canonical_keys(&self) -> Vec<(ActionKind, String)> {
        let mut keys: Vec<_> = self
            .actions
            .iter()
            .map(|a| (a.kind(), a.target().to_string()))
            .collect();
        keys.sort();
        keys
    }

    #[must_use]
    pub fn entries(&self) -> Vec<PlanEntry> {
        self.actions
            .iter()
            .map(|a| PlanEntry {
                kind: a.kind(),
                target: a.target().to_string(),
                msg: a.msg().to_string(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a DesiredClusterState {
    type Item = &'a ClusterAction;
    type IntoIter = std::slice::Iter<'a, ClusterAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
