// ABOUTME: OAuth portal configuration resolved from untrusted environment values
// ABOUTME: Normalizes the portal URL and app id, failing soft to absent fields on any bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use std::env;

use serde::Serialize;
use url::Url;

use crate::constants::env_vars;

/// Raw, unvalidated portal settings as they arrive from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthEnv {
    /// Candidate for `VITE_OAUTH_PORTAL_URL`
    pub portal_url: Option<String>,
    /// Candidate for `VITE_APP_ID`
    pub app_id: Option<String>,
}

impl OAuthEnv {
    /// Read both candidates from the process environment
    ///
    /// Unset and non-Unicode variables are both treated as missing.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self {
            portal_url: env::var(env_vars::OAUTH_PORTAL_URL).ok(),
            app_id: env::var(env_vars::APP_ID).ok(),
        }
    }

    /// Pick the portal settings out of arbitrary key/value pairs
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in vars {
            match key.as_ref() {
                env_vars::OAUTH_PORTAL_URL => raw.portal_url = Some(value.into()),
                env_vars::APP_ID => raw.app_id = Some(value.into()),
                _ => {}
            }
        }
        raw
    }
}

/// Validated portal configuration
///
/// Built once at startup and never mutated. When present, the portal URL is an
/// absolute `https` URL without trailing slashes and the app id is non-empty
/// and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    oauth_portal_url: Option<String>,
    app_id: Option<String>,
}

impl OAuthConfig {
    /// Resolve a configuration from raw candidates. Never fails.
    #[must_use]
    pub fn from_env_values(raw: &OAuthEnv) -> Self {
        Self {
            oauth_portal_url: normalize_env_value(raw.portal_url.as_deref())
                .and_then(normalize_portal_url),
            app_id: normalize_env_value(raw.app_id.as_deref()).map(str::to_owned),
        }
    }

    /// Resolve a configuration from the process environment
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::from_env_values(&OAuthEnv::from_process_env())
    }

    /// Validated portal URL, if any
    #[must_use]
    pub fn oauth_portal_url(&self) -> Option<&str> {
        self.oauth_portal_url.as_deref()
    }

    /// Validated app id, if any
    #[must_use]
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Whether both the portal URL and the app id are present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.oauth_portal_url.is_some() && self.app_id.is_some()
    }

    /// Portal URL and app id together, only when both are present
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.oauth_portal_url()?, self.app_id()?))
    }
}

fn normalize_env_value(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim_matches(is_ecmascript_whitespace);
    (!trimmed.is_empty()).then_some(trimmed)
}

// ECMAScript WhiteSpace and LineTerminator: differs from `char::is_whitespace`
// by including U+FEFF and excluding U+0085.
const fn is_ecmascript_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn normalize_portal_url(value: &str) -> Option<String> {
    let url = Url::parse(value).ok()?;
    if url.scheme() != "https" {
        return None;
    }
    Some(url.as_str().trim_end_matches('/').to_owned())
}
