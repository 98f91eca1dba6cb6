// ABOUTME: Production logging setup using tracing-subscriber
// ABOUTME: Text or JSON output, RUST_LOG overrides the configured default level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::environment::{LogFormat, LoggingConfig};
use crate::errors::{AppError, AppResult};

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level.to_tracing_level()).into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
    };

    result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
}
