// ABOUTME: Configuration module for the login gateway
// ABOUTME: Environment-only configuration; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, LogFormat, LogLevel, LoggingConfig, ServerConfig};
