#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use polis_server::handler::routes;
use polis_server::middleware::{
    RouterObservabilityExt, RouterOpenApiExt, RouterRecoveryExt, RouterSecurityExt,
};
use polis_server::service::ServiceState;

use crate::config::{Cli, MiddlewareConfig, ServerConfig};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "polis_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "polis_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "polis_cli::config";

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

    cli.log();
    cli.validate()?;

    let state = ServiceState::from_config(cli.service.clone())
        .await
        .context("failed to create service state")?;
    let router = create_router(state, &cli.middleware, &cli.server);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost): catches panics and enforces timeouts
/// 2. Observability: request ids and tracing spans
/// 3. Security: CORS, body limits and response headers
/// 4. Routes (innermost): OpenAPI document and request handlers
fn create_router(state: ServiceState, middleware: &MiddlewareConfig, server: &ServerConfig) -> Router {
    let api_routes: Router = routes()
        .with_open_api(middleware.open_api.clone())
        .with_state(state);

    api_routes
        .with_security(&middleware.cors)
        .with_observability()
        .with_recovery(&server.recovery())
}
