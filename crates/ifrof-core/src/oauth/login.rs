// ABOUTME: Portal sign-in URL construction from a validated OAuth configuration
// ABOUTME: Pure derivation of the app-auth endpoint with appId, redirectUri, state and type parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use super::config::OAuthConfig;
use crate::constants::oauth::{params, APP_AUTH_SEGMENT, CALLBACK_PATH, SIGN_IN_TYPE};

/// Whether the configuration can be used to build a login URL
#[must_use]
pub const fn is_oauth_configured(config: &OAuthConfig) -> bool {
    config.is_configured()
}

/// Opaque state token: standard base64 of the redirect target's UTF-8 bytes
///
/// The token is not signed and carries no nonce; anyone can forge it.
#[must_use]
pub fn encode_state(redirect_uri: &str) -> String {
    STANDARD.encode(redirect_uri.as_bytes())
}

/// Default redirect target for a deployment reachable at `origin`
#[must_use]
pub fn default_redirect_uri(origin: &str) -> String {
    format!("{origin}{CALLBACK_PATH}")
}

/// Build the portal sign-in URL
///
/// `redirect_uri` is used verbatim when given. Otherwise the callback on the
/// ambient `origin` is used. Returns `None` when the configuration is not
/// usable, when no redirect target can be determined, or when the resolved
/// target is empty.
#[must_use]
pub fn oauth_login_url(
    config: &OAuthConfig,
    redirect_uri: Option<&str>,
    origin: Option<&str>,
) -> Option<String> {
    let (portal_url, app_id) = config.credentials()?;

    let redirect_uri = match redirect_uri {
        Some(explicit) => explicit.to_owned(),
        None => default_redirect_uri(origin?),
    };
    if redirect_uri.is_empty() {
        return None;
    }

    let state = encode_state(&redirect_uri);
    let base = if portal_url.ends_with('/') {
        portal_url.to_owned()
    } else {
        format!("{portal_url}/")
    };

    let mut url = Url::parse(&base).ok()?.join(APP_AUTH_SEGMENT).ok()?;
    url.query_pairs_mut()
        .append_pair(params::APP_ID, app_id)
        .append_pair(params::REDIRECT_URI, &redirect_uri)
        .append_pair(params::STATE, &state)
        .append_pair(params::TYPE, SIGN_IN_TYPE);

    Some(url.into())
}
