// ABOUTME: Liveness endpoint for load balancers and deployment checks
// ABOUTME: Reports service identity, version, environment, and whether portal sign-in is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::config::environment::Environment;
use crate::context::AuthContext;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "ifrof-auth";

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Deployment environment
    pub environment: Environment,
    /// Whether portal sign-in is usable
    pub oauth_configured: bool,
}

/// Health check routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create health routes with context
    pub fn routes(context: AuthContext) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(context)
    }

    async fn handle_health(State(context): State<AuthContext>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_owned(),
            service: SERVICE_NAME.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: context.config.environment,
            oauth_configured: context.login.is_configured(),
        })
    }
}
