#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use linkgate_server::handler;
use linkgate_server::middleware::{RecoveryConfig, RouterObservabilityExt, RouterRecoveryExt};
use linkgate_server::service::ServiceState;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "linkgate_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "linkgate_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "linkgate_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.validate().context("invalid configuration")?;
    cli.log();

    let state =
        ServiceState::from_config(&cli.service).context("failed to initialize storage backend")?;
    let router = create_router(state, &cli);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. CORS
/// 4. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    handler::routes(state)
        .layer(cli.server.cors_layer())
        .with_observability()
        .with_recovery(&RecoveryConfig::with_timeout_secs(
            cli.server.request_timeout,
        ))
}
