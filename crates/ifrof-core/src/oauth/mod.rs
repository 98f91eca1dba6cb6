// ABOUTME: OAuth portal sign-in resolution for the marketplace login control
// ABOUTME: Composes validated configuration, login URL derivation, and the log-once diagnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

//! `OAuth` portal sign-in
//!
//! Raw environment values become an [`OAuthConfig`] once at startup. Callers
//! then ask whether sign-in is usable and, if so, for the portal URL to send the
//! user agent to. Redirecting is the caller's job.

/// Configuration resolution from untrusted input
pub mod config;
/// Log-once diagnostic for unusable configuration
pub mod diagnostics;
/// Login URL construction
pub mod login;

pub use config::{OAuthConfig, OAuthEnv};
pub use diagnostics::{config_error_message, ConfigErrorLog};
pub use login::{default_redirect_uri, encode_state, is_oauth_configured, oauth_login_url};

pub use crate::constants::oauth::OAUTH_UNAVAILABLE_MESSAGE;

/// Portal sign-in resolver owned by whoever wires the application together
///
/// Holds the validated configuration and the diagnostic cell, so there is no
/// process-global state: one instance is built at startup and shared.
#[derive(Debug, Default)]
pub struct OAuthLogin {
    config: OAuthConfig,
    error_log: ConfigErrorLog,
}

impl OAuthLogin {
    /// Wrap a resolved configuration with a fresh diagnostic cell
    #[must_use]
    pub const fn new(config: OAuthConfig) -> Self {
        Self {
            config,
            error_log: ConfigErrorLog::new(),
        }
    }

    /// The resolved configuration
    #[must_use]
    pub const fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// The diagnostic cell
    #[must_use]
    pub const fn error_log(&self) -> &ConfigErrorLog {
        &self.error_log
    }

    /// Whether sign-in is usable
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Portal sign-in URL, see [`oauth_login_url`]
    #[must_use]
    pub fn login_url(&self, redirect_uri: Option<&str>, origin: Option<&str>) -> Option<String> {
        oauth_login_url(&self.config, redirect_uri, origin)
    }

    /// Report the configuration problem once per instance
    pub fn log_config_error_once(&self, context: Option<&str>) -> bool {
        self.error_log.log_once(context)
    }
}
