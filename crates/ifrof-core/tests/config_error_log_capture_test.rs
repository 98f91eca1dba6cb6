// ABOUTME: Captures tracing output to verify the configuration diagnostic is emitted exactly once
// ABOUTME: Kept in its own test binary so no other test competes for the scoped subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use ifrof_core::oauth::OAuthLogin;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_repeated_reports_produce_one_error_event() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();

    let login = OAuthLogin::default();
    tracing::subscriber::with_default(subscriber, || {
        login.log_config_error_once(Some("(login button)"));
        for _ in 0..5 {
            login.log_config_error_once(Some("(again)"));
        }
    });

    let output = logs.contents();
    assert_eq!(
        output
            .matches("OAuth configuration is missing or invalid.")
            .count(),
        1
    );
    assert!(output.contains("ERROR"));
    assert!(output.contains("(login button)"));
    assert!(!output.contains("(again)"));
}
