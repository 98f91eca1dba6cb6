// ABOUTME: Unified error handling for the login gateway with standard error codes
// ABOUTME: Maps error codes to HTTP status codes and renders JSON error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

//! Error taxonomy for the gateway
//!
//! The `OAuth` core never fails; it signals problems with absent values. Errors
//! here cover what surrounds it: environment parsing, socket binding, logging
//! setup, and request-level failures the HTTP layer reports to clients.

use std::fmt;
use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ifrof_core::oauth::OAUTH_UNAVAILABLE_MESSAGE;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Standard error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request is missing data or carries malformed data
    InvalidInput,
    /// Portal sign-in is not configured for this deployment
    OAuthUnavailable,
    /// Server configuration could not be loaded
    ConfigError,
    /// Unexpected server-side failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status returned for this code
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::OAuthUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::ConfigError | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::OAuthUnavailable => "oauth_unavailable",
            Self::ConfigError => "config_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error carrying a code and a human-readable message
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Message safe to show to clients
    pub message: String,
}

/// Result alias used across the gateway
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid request input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration loading failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Sign-in unavailable, carrying the support-contact message shown to users
    #[must_use]
    pub fn oauth_unavailable() -> Self {
        Self::new(ErrorCode::OAuthUnavailable, OAUTH_UNAVAILABLE_MESSAGE)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::internal(format!("I/O error: {error}"))
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Wire error code
    pub error: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        let body = ErrorResponse {
            error: self.code,
            message: self.message,
        };
        (status, Json(body)).into_response()
    }
}
