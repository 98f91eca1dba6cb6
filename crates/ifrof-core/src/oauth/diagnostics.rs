// ABOUTME: Log-once diagnostic cell for unusable OAuth configuration
// ABOUTME: Emits a single operator-facing error per cell regardless of how many callers report it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::error;

use crate::constants::oauth::CONFIG_ERROR_MESSAGE;

/// Two-state guard: not-yet-logged, then logged for the rest of its lifetime
#[derive(Debug, Default)]
pub struct ConfigErrorLog {
    logged: AtomicBool,
}

impl ConfigErrorLog {
    /// Create a cell in the not-yet-logged state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logged: AtomicBool::new(false),
        }
    }

    /// Whether the diagnostic has already been emitted
    #[must_use]
    pub fn has_logged(&self) -> bool {
        self.logged.load(Ordering::Acquire)
    }

    /// Move to the logged state, returning `true` only for the transition
    pub fn mark_logged(&self) -> bool {
        !self.logged.swap(true, Ordering::AcqRel)
    }

    /// Emit the configuration error the first time this is called
    ///
    /// A non-empty `context` is appended to the message. Returns whether
    /// this call emitted.
    pub fn log_once(&self, context: Option<&str>) -> bool {
        if !self.mark_logged() {
            return false;
        }
        error!("{}", config_error_message(context));
        true
    }

    /// Return to the not-yet-logged state
    #[cfg(any(test, feature = "testing"))]
    pub fn reset(&self) {
        self.logged.store(false, Ordering::Release);
    }
}

/// Full diagnostic text for an optional context suffix
#[must_use]
pub fn config_error_message(context: Option<&str>) -> String {
    match context {
        Some(suffix) if !suffix.is_empty() => format!("{CONFIG_ERROR_MESSAGE} {suffix}"),
        _ => CONFIG_ERROR_MESSAGE.to_owned(),
    }
}
