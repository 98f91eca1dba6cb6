// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP port, public base URL, logging options, and OAuth portal settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

//! Environment-based configuration for production deployment

use std::env;
use std::fmt;

use ifrof_core::oauth::OAuthConfig;
use serde::Serialize;
use tracing::{info, warn, Level};
use url::Url;

use crate::errors::{AppError, AppResult};

/// Default HTTP port when `HTTP_PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse from string, `None` when unrecognized
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
}

/// Gateway configuration
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Public base URL of this deployment, used to derive the default callback
    pub base_url: Option<String>,
    /// Deployment environment
    pub environment: Environment,
    /// Logging options
    pub logging: LoggingConfig,
    /// Resolved `OAuth` portal settings
    pub oauth: OAuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            base_url: None,
            environment: Environment::default(),
            logging: LoggingConfig::default(),
            oauth: OAuthConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but is not a valid port number.
    /// Every other setting falls back to a default when missing or malformed.
    pub fn from_env() -> AppResult<Self> {
        let environment = env_value("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            http_port: parse_port(env_value("HTTP_PORT").as_deref())?,
            base_url: env_value("BASE_URL"),
            environment,
            logging: LoggingConfig {
                level: env_value("LOG_LEVEL")
                    .map(|value| LogLevel::from_str_or_default(&value))
                    .unwrap_or_default(),
                format: env_value("LOG_FORMAT")
                    .and_then(|value| LogFormat::parse(&value))
                    .unwrap_or_else(|| default_log_format(environment)),
            },
            oauth: OAuthConfig::from_process_env(),
        };

        Ok(config)
    }

    /// Origin (`scheme://host[:port]`) of the public base URL, if one is configured
    #[must_use]
    pub fn public_origin(&self) -> Option<String> {
        let url = Url::parse(self.base_url.as_deref()?).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        Some(url.origin().ascii_serialization())
    }

    /// Log a summary of the loaded configuration
    pub fn log_summary(&self) {
        info!(
            http_port = self.http_port,
            environment = %self.environment,
            base_url = self.base_url.as_deref().unwrap_or("<unset>"),
            oauth_configured = self.oauth.is_configured(),
            "Configuration loaded"
        );

        if let (Some(base_url), None) = (self.base_url.as_deref(), self.public_origin()) {
            warn!(
                base_url,
                "BASE_URL is not an absolute http(s) URL; login requests must supply returnTo"
            );
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_port(value: Option<&str>) -> AppResult<u16> {
    value.map_or(Ok(DEFAULT_HTTP_PORT), |raw| {
        raw.parse::<u16>()
            .map_err(|e| AppError::config(format!("Invalid HTTP_PORT '{raw}': {e}")))
    })
}

const fn default_log_format(environment: Environment) -> LogFormat {
    if environment.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Text
    }
}
