// ABOUTME: OAuth portal sign-in routes for the marketplace login control
// ABOUTME: Redirects the user agent to the identity portal and reports whether sign-in is available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Json, Router,
};
use ifrof_core::oauth::OAUTH_UNAVAILABLE_MESSAGE;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::AuthContext;
use crate::errors::{AppError, AppResult};

/// Query string of `GET /api/oauth/login`
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    /// Explicit redirect target, used verbatim
    #[serde(rename = "returnTo")]
    pub return_to: Option<String>,
}

/// Body of `GET /api/oauth/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OAuthStatusResponse {
    /// Whether the login control should be enabled
    pub configured: bool,
    /// Support-contact message to show when it is not
    pub message: Option<String>,
}

/// Portal sign-in routes
pub struct OAuthLoginRoutes;

impl OAuthLoginRoutes {
    /// Create the sign-in routes with context
    pub fn routes(context: AuthContext) -> Router {
        Router::new()
            .route("/api/oauth/login", get(Self::handle_login))
            .route("/api/oauth/status", get(Self::handle_status))
            .with_state(context)
    }

    /// Redirect to the portal (GET /api/oauth/login)
    async fn handle_login(
        State(context): State<AuthContext>,
        Query(query): Query<LoginQuery>,
    ) -> AppResult<Redirect> {
        if !context.login.is_configured() {
            context.login.log_config_error_once(Some("(login request)"));
            return Err(AppError::oauth_unavailable());
        }

        let Some(login_url) = context
            .login
            .login_url(query.return_to.as_deref(), context.public_origin.as_deref())
        else {
            context.login.log_config_error_once(Some("(no redirect target)"));
            return Err(missing_redirect_error(query.return_to.as_deref()));
        };

        debug!(explicit_return = query.return_to.is_some(), "Redirecting to OAuth portal");
        Ok(Redirect::to(&login_url))
    }

    /// Report sign-in availability (GET /api/oauth/status)
    async fn handle_status(State(context): State<AuthContext>) -> Json<OAuthStatusResponse> {
        let configured = context.login.is_configured();
        if !configured {
            context.login.log_config_error_once(None);
        }

        Json(OAuthStatusResponse {
            configured,
            message: (!configured).then(|| OAUTH_UNAVAILABLE_MESSAGE.to_owned()),
        })
    }
}

fn missing_redirect_error(return_to: Option<&str>) -> AppError {
    match return_to {
        Some(_) => AppError::invalid_input("returnTo must not be empty"),
        None => AppError::invalid_input("returnTo is required when no public base URL is configured"),
    }
}
