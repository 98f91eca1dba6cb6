// ABOUTME: Main library entry point for the IFROF marketplace login gateway
// ABOUTME: Serves OAuth portal sign-in redirects and availability status over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

#![deny(unsafe_code)]

//! # IFROF Login Gateway
//!
//! Buyers and factories on the IFROF marketplace sign in through an external
//! identity portal. This crate wires the resolver from `ifrof_core` into an
//! HTTP service:
//!
//! - `GET /api/oauth/login` sends the user agent to the portal
//! - `GET /api/oauth/status` tells the UI whether to enable its login control
//! - `GET /health` for liveness checks
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ifrof_auth::config::environment::ServerConfig;
//! use ifrof_auth::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     ifrof_auth::server::run(config).await
//! }
//! ```

/// Inspection commands for the `ifrof-auth` binary
pub mod cli;

/// Configuration management
pub mod config;

/// Focused dependency injection context
pub mod context;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// `HTTP` routes for portal sign-in and health
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
