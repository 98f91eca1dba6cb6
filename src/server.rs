// ABOUTME: HTTP server assembly and lifecycle for the login gateway
// ABOUTME: Merges route groups, applies request tracing, and serves until a shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use std::future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::environment::ServerConfig;
use crate::context::AuthContext;
use crate::errors::{AppError, AppResult};
use crate::routes::{HealthRoutes, OAuthLoginRoutes};

/// Build the full application router
pub fn build_router(context: AuthContext) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(context.clone()))
        .merge(OAuthLoginRoutes::routes(context))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Serve the gateway until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run(config: ServerConfig) -> AppResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let context = AuthContext::new(config);

    if !context.login.is_configured() {
        context.login.log_config_error_once(Some("(startup)"));
    }

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Login gateway listening");

    axum::serve(listener, build_router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
