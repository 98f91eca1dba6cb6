// ABOUTME: Shared test utilities for gateway integration tests
// ABOUTME: Builds configurations and contexts and drives routers without a socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `ifrof_auth`

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use ifrof_auth::{
    config::environment::{Environment, ServerConfig},
    context::AuthContext,
    server::build_router,
};
use ifrof_core::oauth::{OAuthConfig, OAuthEnv};
use serde_json::Value;
use tower::ServiceExt;

pub const PORTAL_URL: &str = "https://auth.ifrof.com";
pub const APP_ID: &str = "ifrof-app";
pub const CALLBACK: &str = "https://ifrof.com/api/oauth/callback";

/// Portal settings that resolve to a usable configuration
pub fn configured_oauth() -> OAuthConfig {
    OAuthConfig::from_env_values(&OAuthEnv::from_vars([
        ("VITE_OAUTH_PORTAL_URL", PORTAL_URL),
        ("VITE_APP_ID", APP_ID),
    ]))
}

pub fn test_config(oauth: OAuthConfig, base_url: Option<&str>) -> ServerConfig {
    ServerConfig {
        base_url: base_url.map(str::to_owned),
        environment: Environment::Testing,
        oauth,
        ..Default::default()
    }
}

pub fn test_context(oauth: OAuthConfig, base_url: Option<&str>) -> AuthContext {
    AuthContext::new(test_config(oauth, base_url))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn location(&self) -> &str {
        self.headers
            .get("location")
            .expect("location header")
            .to_str()
            .unwrap()
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: body.to_vec(),
    }
}

pub async fn get_with(context: &AuthContext, uri: &str) -> TestResponse {
    get(build_router(context.clone()), uri).await
}
