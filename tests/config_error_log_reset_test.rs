// ABOUTME: Tests for the test-only reset seam of the log-once diagnostic
// ABOUTME: Relies on the `testing` feature enabled for ifrof-core in dev-dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use common::{get_with, test_context};
use ifrof_core::oauth::{ConfigErrorLog, OAuthConfig};

#[test]
fn test_reset_allows_one_more_emission() {
    let log = ConfigErrorLog::new();

    assert!(log.log_once(None));
    assert!(!log.log_once(None));

    log.reset();
    assert!(!log.has_logged());
    assert!(log.log_once(Some("(after reset)")));
    assert!(!log.log_once(None));
}

#[tokio::test]
async fn test_reset_between_requests() {
    let context = test_context(OAuthConfig::default(), None);

    let response = get_with(&context, "/api/oauth/status").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(context.login.error_log().has_logged());

    context.login.error_log().reset();
    assert!(!context.login.error_log().has_logged());

    get_with(&context, "/api/oauth/login").await;
    assert!(context.login.error_log().has_logged());
}
