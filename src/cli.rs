// ABOUTME: Command implementations behind the ifrof-auth binary's inspection subcommands
// ABOUTME: Derives the portal sign-in URL and the JSON configuration report from a loaded config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use ifrof_core::oauth::{OAuthLogin, OAUTH_UNAVAILABLE_MESSAGE};
use serde_json::{json, Value};

use crate::config::environment::ServerConfig;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Portal sign-in URL for `return_to`, or the callback on the public origin
///
/// # Errors
///
/// Returns [`ErrorCode::OAuthUnavailable`] when the portal settings are not
/// usable, and [`ErrorCode::InvalidInput`] when no redirect target can be
/// derived (no `--return-to`, an empty one, or no usable `BASE_URL`).
pub fn login_url(config: &ServerConfig, return_to: Option<&str>) -> AppResult<String> {
    let login = OAuthLogin::new(config.oauth.clone());
    if !login.is_configured() {
        return Err(AppError::new(
            ErrorCode::OAuthUnavailable,
            format!(
                "{OAUTH_UNAVAILABLE_MESSAGE} (set VITE_OAUTH_PORTAL_URL to an https URL and VITE_APP_ID)"
            ),
        ));
    }

    let origin = config.public_origin();
    login
        .login_url(return_to, origin.as_deref())
        .ok_or_else(|| AppError::invalid_input("No redirect target: pass --return-to or set BASE_URL"))
}

/// JSON report of the resolved portal settings and public origin
#[must_use]
pub fn config_report(config: &ServerConfig) -> Value {
    json!({
        "configured": config.oauth.is_configured(),
        "oauth": config.oauth,
        "publicOrigin": config.public_origin(),
    })
}
