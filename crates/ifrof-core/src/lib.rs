// ABOUTME: Core domain crate for the IFROF marketplace login gateway
// ABOUTME: Validates OAuth portal settings and derives portal sign-in URLs without any HTTP dependency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

#![deny(unsafe_code)]

//! # IFROF Core
//!
//! Pure building blocks shared by the login gateway and its tooling:
//!
//! - **Constants**: environment variable names, portal path segments, user-facing messages
//! - **`OAuth`**: configuration resolution, login URL construction, and the
//!   log-once diagnostic used when sign-in is unavailable
//!
//! Nothing in this crate performs I/O apart from reading the process environment
//! on request and emitting a single `tracing` event from [`oauth::ConfigErrorLog`].
//!
//! ```rust
//! use ifrof_core::oauth::{OAuthConfig, OAuthEnv, OAuthLogin};
//!
//! let env = OAuthEnv::from_vars([
//!     ("VITE_OAUTH_PORTAL_URL", "https://auth.ifrof.com"),
//!     ("VITE_APP_ID", "ifrof-app"),
//! ]);
//! let login = OAuthLogin::new(OAuthConfig::from_env_values(&env));
//!
//! assert!(login.is_configured());
//! assert!(login
//!     .login_url(Some("https://ifrof.com/api/oauth/callback"), None)
//!     .is_some());
//! ```

/// Application constants shared across crates
pub mod constants;

/// `OAuth` portal configuration and login URL derivation
pub mod oauth;
