//! # KCCTL CLI
//!
//! Command-line interface for the Keycloak client reconciler.
//!
//! Plans are computed offline from files, so the tool is useful for reviewing
//! what a change to a KeycloakClient would do before it is applied.
//!
//! ## Usage
//!
//! ```bash
//! # Show the actions that converge observed state to a KeycloakClient
//! kcctl plan --desired client.yaml --observed observed.yaml
//!
//! # Same, as JSON
//! kcctl plan --desired client.yaml --observed observed.yaml --output json
//!
//! # Check a KeycloakClient for duplicate role names/ids and other mistakes
//! kcctl validate --desired client.yaml
//!
//! # Print the KeycloakClient CRD
//! kcctl crd
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use keycloak_client_reconciler::config::ReconcilerConfig;
use keycloak_client_reconciler::observability;
use std::path::PathBuf;

mod crd;
mod plan;
mod validate;

/// Keycloak Client Reconciler CLI
#[derive(Parser)]
#[command(name = "kcctl")]
#[command(
    about = "Plan and validate KeycloakClient reconciliation",
    long_about = None,
    after_help = "\
Examples:
  kcctl plan --desired client.yaml --observed observed.yaml
  kcctl validate --desired client.yaml
  kcctl crd > keycloakclient-crd.yaml
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the actions that converge observed state to a KeycloakClient
    Plan {
        /// KeycloakClient resource (YAML)
        #[arg(short, long, value_name = "FILE")]
        desired: PathBuf,

        /// Observed client, secret and roles (YAML or JSON)
        /// Omit to plan against an empty Keycloak
        #[arg(short, long, value_name = "FILE")]
        observed: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Plan even when validation fails
        #[arg(long)]
        skip_validation: bool,
    },
    /// Validate a KeycloakClient resource
    Validate {
        /// KeycloakClient resource (YAML)
        #[arg(short, long, value_name = "FILE")]
        desired: PathBuf,
    },
    /// Print the KeycloakClient CustomResourceDefinition
    Crd,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ReconcilerConfig::from_env();

    observability::init_tracing(&config).context("Failed to initialize logging")?;
    if config.enable_metrics {
        observability::register_metrics().context("Failed to register metrics")?;
    }

    match cli.command {
        Commands::Plan {
            desired,
            observed,
            output,
            skip_validation,
        } => plan::plan_command(&config, &desired, observed.as_deref(), output, skip_validation),
        Commands::Validate { desired } => validate::validate_command(&config, &desired),
        Commands::Crd => crd::crd_command(),
    }
}
