// ABOUTME: Route module organization for the login gateway HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the OAuth resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

//! Route module for the login gateway
//!
//! Handlers only translate between HTTP and the resolver in `ifrof_core`; they
//! hold no state of their own beyond the shared [`AuthContext`](crate::context::AuthContext).

/// Health check routes
pub mod health;

/// Portal sign-in redirect and status routes
pub mod oauth;

pub use health::{HealthResponse, HealthRoutes};
pub use oauth::{LoginQuery, OAuthLoginRoutes, OAuthStatusResponse};
