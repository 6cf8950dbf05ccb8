//! # Action Runner
//!
//! Executes a planned [`DesiredClusterState`] against Keycloak and Kubernetes.
//!
//! The transport is abstracted behind [`ActionRunner`]; this module only owns
//! the execution policy:
//! - Availability checks run first. When one fails and
//!   `abort_on_unavailable` is set, no mutating action is attempted.
//! - Every other action is attempted in plan order. A failing action is
//!   recorded and does not prevent unrelated actions from running.
//!
//! Retrying failed actions is left to the next reconciliation pass.

use crate::config::ReconcilerConfig;
use crate::controller::actions::{ActionKind, ClusterAction, DesiredClusterState};
use crate::controller::reconciler::ReconcilerError;
use crate::crd::{KeycloakClient, KeycloakClientStatus, Phase, RoleRepresentation};
use crate::observability::metrics;
use anyhow::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Transport for planned actions
///
/// Implementations talk to the Keycloak admin API and the Kubernetes API.
/// Re-applying identical data must be harmless: self-paired role updates are
/// re-sent on every pass.
#[async_trait]
pub trait ActionRunner: Send + Sync {
    /// Check that Keycloak is reachable
    async fn ping(&self) -> Result<()>;

    async fn create_client(&self, client: &KeycloakClient, realm: &str) -> Result<()>;

    async fn update_client(&self, client: &KeycloakClient, realm: &str) -> Result<()>;

    async fn delete_client(&self, client: &KeycloakClient, realm: &str) -> Result<()>;

    async fn create_client_secret(&self, secret: &Secret) -> Result<()>;

    async fn update_client_secret(&self, secret: &Secret) -> Result<()>;

    async fn create_client_role(
        &self,
        role: &RoleRepresentation,
        client_id: &str,
        realm: &str,
    ) -> Result<()>;

    /// Update the role Keycloak knows as `old_role` to look like `role`
    async fn update_client_role(
        &self,
        role: &RoleRepresentation,
        old_role: &RoleRepresentation,
        client_id: &str,
        realm: &str,
    ) -> Result<()>;

    async fn delete_client_role(
        &self,
        role: &RoleRepresentation,
        client_id: &str,
        realm: &str,
    ) -> Result<()>;
}

/// Send one action to the runner
async fn dispatch(action: &ClusterAction, runner: &dyn ActionRunner) -> Result<()> {
    match action {
        ClusterAction::Ping { .. } => runner.ping().await,
        ClusterAction::CreateClient { client, realm, .. } => {
            runner.create_client(client, realm).await
        }
        ClusterAction::UpdateClient { client, realm, .. } => {
            runner.update_client(client, realm).await
        }
        ClusterAction::DeleteClient { client, realm, .. } => {
            runner.delete_client(client, realm).await
        }
        ClusterAction::CreateClientSecret { secret, .. } => {
            runner.create_client_secret(secret).await
        }
        ClusterAction::UpdateClientSecret { secret, .. } => {
            runner.update_client_secret(secret).await
        }
        ClusterAction::CreateClientRole {
            role,
            client_id,
            realm,
            ..
        } => runner.create_client_role(role, client_id, realm).await,
        ClusterAction::UpdateClientRole {
            role,
            old_role,
            client_id,
            realm,
            ..
        } => {
            runner
                .update_client_role(role, old_role, client_id, realm)
                .await
        }
        ClusterAction::DeleteClientRole {
            role,
            client_id,
            realm,
            ..
        } => runner.delete_client_role(role, client_id, realm).await,
    }
}

/// An action that could not be applied
#[derive(Debug, Clone)]
pub struct ActionFailure {
    pub kind: ActionKind,
    pub msg: String,
    pub error: String,
}

/// Outcome of executing a plan
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    /// Number of actions applied without error
    pub succeeded: usize,
    /// Actions that failed, in plan order
    pub failures: Vec<ActionFailure>,
}

impl ExecutionReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, action: &ClusterAction, outcome: Result<()>) {
        let kind = action.kind();
        match outcome {
            Ok(()) => {
                debug!("Applied: {}", action.msg());
                metrics::increment_actions_executed(kind.as_str());
                self.succeeded += 1;
            }
            Err(e) => {
                error!("Failed to {}: {:#}", action.msg(), e);
                metrics::increment_action_failures(kind.as_str());
                self.failures.push(ActionFailure {
                    kind,
                    msg: action.msg().to_string(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    /// Status to publish on the KeycloakClient after this execution
    #[must_use]
    pub fn status(&self, secret_name: Option<String>) -> KeycloakClientStatus {
        if self.is_success() {
            KeycloakClientStatus {
                phase: Some(Phase::Reconciled),
                message: Some(format!("{} actions applied", self.succeeded)),
                ready: true,
                secret_name,
            }
        } else {
            let first = &self.failures[0];
            KeycloakClientStatus {
                phase: Some(Phase::Failing),
                message: Some(format!(
                    "{} of {} actions failed, first: {}: {}",
                    self.failures.len(),
                    self.failures.len() + self.succeeded,
                    first.msg,
                    first.error
                )),
                ready: false,
                secret_name,
            }
        }
    }
}

impl ReconcilerError {
    /// Status to publish when execution stopped before applying anything
    #[must_use]
    pub fn status(&self) -> KeycloakClientStatus {
        let phase = match self {
            ReconcilerError::KeycloakUnavailable(_) => Phase::Unavailable,
            ReconcilerError::Validation(_) => Phase::Failing,
        };
        KeycloakClientStatus {
            phase: Some(phase),
            message: Some(self.to_string()),
            ready: false,
            secret_name: None,
        }
    }
}

impl DesiredClusterState {
    /// Execute the plan with `runner`
    ///
    /// # Errors
    ///
    /// Returns [`ReconcilerError::KeycloakUnavailable`] when an availability check fails and
    /// `config.abort_on_unavailable` is set. Failures of individual mutating actions are
    /// reported in the returned [`ExecutionReport`] instead.
    pub async fn execute(
        &self,
        runner: &dyn ActionRunner,
        config: &ReconcilerConfig,
    ) -> Result<ExecutionReport, ReconcilerError> {
        let span = info_span!("reconciler.execute", actions = self.len());
        async move {
            let mut report = ExecutionReport::default();

            for action in self.of_kind(ActionKind::Ping) {
                match dispatch(action, runner).await {
                    Ok(()) => report.record(action, Ok(())),
                    Err(e) => {
                        metrics::increment_ping_failures();
                        if config.abort_on_unavailable {
                            warn!("Keycloak availability check failed, skipping plan: {:#}", e);
                            return Err(ReconcilerError::KeycloakUnavailable(format!("{e:#}")));
                        }
                        report.record(action, Err(e));
                    }
                }
            }

            for action in self.iter().filter(|a| a.is_mutating()) {
                let outcome = dispatch(action, runner).await;
                report.record(action, outcome);
            }

            info!(
                "Executed plan: {} succeeded, {} failed",
                report.succeeded,
                report.failures.len()
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }
}
