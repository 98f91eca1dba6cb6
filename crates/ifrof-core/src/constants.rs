// ABOUTME: Shared constants for environment keys, portal routing, and user-facing messages
// ABOUTME: Single source of truth for literals that form part of the portal login contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

/// Environment variable names read at startup
pub mod env_vars {
    /// Base origin of the external identity portal (must be HTTPS)
    pub const OAUTH_PORTAL_URL: &str = "VITE_OAUTH_PORTAL_URL";
    /// Application identifier registered with the identity portal
    pub const APP_ID: &str = "VITE_APP_ID";
}

/// Portal sign-in contract
pub mod oauth {
    /// Shown to users in place of the login control when sign-in is unusable
    pub const OAUTH_UNAVAILABLE_MESSAGE: &str =
        "Login is temporarily unavailable. Please contact support@ifrof.com";

    /// Operator-facing diagnostic emitted once when configuration is missing or invalid
    pub const CONFIG_ERROR_MESSAGE: &str =
        "Login is temporarily unavailable. OAuth configuration is missing or invalid.";

    /// Callback path appended to the ambient origin when no redirect target is given
    pub const CALLBACK_PATH: &str = "/api/oauth/callback";

    /// Portal endpoint segment, resolved relative to the portal URL
    pub const APP_AUTH_SEGMENT: &str = "app-auth";

    /// Fixed value of the `type` query parameter
    pub const SIGN_IN_TYPE: &str = "signIn";

    /// Query parameter names, in assignment order
    pub mod params {
        /// Configured application identifier
        pub const APP_ID: &str = "appId";
        /// Redirect target handed back to us after sign-in
        pub const REDIRECT_URI: &str = "redirectUri";
        /// Opaque state token
        pub const STATE: &str = "state";
        /// Flow type
        pub const TYPE: &str = "type";
    }
}
