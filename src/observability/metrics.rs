//! # Metrics
//!
//! Prometheus metrics for monitoring reconciliation.
//!
//! ## Metrics Exposed
//!
//! - `keycloak_client_reconciliations_total` - Total number of planning passes
//! - `keycloak_client_actions_planned_total{kind}` - Actions planned, by action kind
//! - `keycloak_client_actions_executed_total{kind}` - Actions applied successfully, by action kind
//! - `keycloak_client_action_failures_total{kind}` - Actions that failed, by action kind
//! - `keycloak_client_ping_failures_total` - Failed availability checks

use crate::controller::actions::DesiredClusterState;
use anyhow::{anyhow, Result};
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::{LazyLock, OnceLock};

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Outcome of the first registration, replayed on later calls
static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

static RECONCILIATIONS_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "keycloak_client_reconciliations_total",
        "Total number of reconciliation planning passes",
    )
    .expect("Failed to create RECONCILIATIONS_TOTAL metric - this should never happen")
});

static ACTIONS_PLANNED_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "keycloak_client_actions_planned_total",
            "Total number of actions planned, by kind",
        ),
        &["kind"],
    )
    .expect("Failed to create ACTIONS_PLANNED_TOTAL metric - this should never happen")
});

static ACTIONS_EXECUTED_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "keycloak_client_actions_executed_total",
            "Total number of actions applied successfully, by kind",
        ),
        &["kind"],
    )
    .expect("Failed to create ACTIONS_EXECUTED_TOTAL metric - this should never happen")
});

static ACTION_FAILURES_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "keycloak_client_action_failures_total",
            "Total number of actions that failed, by kind",
        ),
        &["kind"],
    )
    .expect("Failed to create ACTION_FAILURES_TOTAL metric - this should never happen")
});

static PING_FAILURES_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "keycloak_client_ping_failures_total",
        "Total number of failed Keycloak availability checks",
    )
    .expect("Failed to create PING_FAILURES_TOTAL metric - this should never happen")
});

/// Register all metrics with the registry
///
/// Safe to call more than once; only the first call registers.
///
/// # Errors
///
/// Returns the error of the first registration attempt, on that call and every later one.
pub fn register_metrics() -> Result<()> {
    register_once(&REGISTERED, try_register)
}

fn register_once(cell: &OnceLock<Result<(), String>>, register: fn() -> Result<()>) -> Result<()> {
    cell.get_or_init(|| register().map_err(|e| format!("{e:#}")))
        .clone()
        .map_err(|e| anyhow!("Failed to register metrics: {e}"))
}

fn try_register() -> Result<()> {
    REGISTRY.register(Box::new(RECONCILIATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(ACTIONS_PLANNED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(ACTIONS_EXECUTED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(ACTION_FAILURES_TOTAL.clone()))?;
    REGISTRY.register(Box::new(PING_FAILURES_TOTAL.clone()))?;
    Ok(())
}

/// Render registered metrics in the Prometheus text exposition format
///
/// # Errors
///
/// Fails when encoding produces invalid UTF-8 or the encoder rejects a metric family.
pub fn gather_metrics() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Count a planning pass and every action it produced
pub fn record_plan(plan: &DesiredClusterState) {
    RECONCILIATIONS_TOTAL.inc();
    for action in plan {
        ACTIONS_PLANNED_TOTAL
            .with_label_values(&[action.kind().as_str()])
            .inc();
    }
}

pub fn increment_actions_executed(kind: &str) {
    ACTIONS_EXECUTED_TOTAL.with_label_values(&[kind]).inc();
}

pub fn increment_action_failures(kind: &str) {
    ACTION_FAILURES_TOTAL.with_label_values(&[kind]).inc();
}

pub fn increment_ping_failures() {
    PING_FAILURES_TOTAL.inc();
}
