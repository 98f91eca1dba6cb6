// ABOUTME: Tests for environment-driven server configuration loading
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use ifrof_auth::config::environment::{
    Environment, LogFormat, LogLevel, ServerConfig, DEFAULT_HTTP_PORT,
};
use ifrof_auth::errors::ErrorCode;
use serial_test::serial;

const VARS: [&str; 7] = [
    "HTTP_PORT",
    "BASE_URL",
    "ENVIRONMENT",
    "LOG_LEVEL",
    "LOG_FORMAT",
    "VITE_OAUTH_PORTAL_URL",
    "VITE_APP_ID",
];

fn clear_env() {
    for key in VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_environment_is_empty() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    assert_eq!(config.base_url, None);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(!config.oauth.is_configured());
    assert_eq!(config.public_origin(), None);
}

#[test]
#[serial]
fn test_full_environment() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("BASE_URL", " https://ifrof.com/ar/ ");
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("LOG_LEVEL", "DEBUG");
    env::set_var("VITE_OAUTH_PORTAL_URL", "https://auth.ifrof.com/");
    env::set_var("VITE_APP_ID", " ifrof-app ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.base_url.as_deref(), Some("https://ifrof.com/ar/"));
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.public_origin().as_deref(), Some("https://ifrof.com"));
    assert!(config.oauth.is_configured());
    assert_eq!(config.oauth.oauth_portal_url(), Some("https://auth.ifrof.com"));
    assert_eq!(config.oauth.app_id(), Some("ifrof-app"));
}

#[test]
#[serial]
fn test_explicit_log_format_overrides_environment_default() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "text");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
#[serial]
fn test_invalid_port_is_config_error() {
    clear_env();
    env::set_var("HTTP_PORT", "eighty");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_invalid_portal_fails_soft() {
    clear_env();
    env::set_var("VITE_OAUTH_PORTAL_URL", "not-a-url");
    env::set_var("VITE_APP_ID", "ifrof-app");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(!config.oauth.is_configured());
    assert_eq!(config.oauth.oauth_portal_url(), None);
}

#[test]
fn test_public_origin_derivation() {
    let origin_of = |base_url: &str| {
        ServerConfig {
            base_url: Some(base_url.to_owned()),
            ..Default::default()
        }
        .public_origin()
    };

    assert_eq!(origin_of("https://ifrof.com/en/").as_deref(), Some("https://ifrof.com"));
    assert_eq!(
        origin_of("http://localhost:5173/login").as_deref(),
        Some("http://localhost:5173")
    );
    assert_eq!(origin_of("https://ifrof.com:443").as_deref(), Some("https://ifrof.com"));
    assert_eq!(origin_of("ftp://files.ifrof.com"), None);
    assert_eq!(origin_of("ifrof.com"), None);
}

#[test]
fn test_level_and_environment_parsing() {
    assert_eq!(LogLevel::from_str_or_default("warning"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    assert_eq!(LogLevel::Trace.to_string(), "trace");
    assert_eq!(Environment::from_str_or_default("TEST"), Environment::Testing);
    assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
    assert_eq!(LogFormat::parse("xml"), None);
}
