// ABOUTME: Shared request context wired once at startup and cloned into handlers
// ABOUTME: Owns the OAuth login resolver so no module-level singleton is needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use std::sync::Arc;

use ifrof_core::oauth::OAuthLogin;

use crate::config::environment::ServerConfig;

/// State shared by all gateway routes
#[derive(Clone)]
pub struct AuthContext {
    /// Portal sign-in resolver and its log-once cell
    pub login: Arc<OAuthLogin>,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    /// Origin derived from `BASE_URL`, stands in for the browser's own origin
    pub public_origin: Option<Arc<str>>,
}

impl AuthContext {
    /// Build the context from a loaded configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let login = OAuthLogin::new(config.oauth.clone());
        let public_origin = config.public_origin().map(Arc::from);
        Self {
            login: Arc::new(login),
            config: Arc::new(config),
            public_origin,
        }
    }
}
