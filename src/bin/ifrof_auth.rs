// ABOUTME: Command-line entry point for the IFROF login gateway
// ABOUTME: Serves the HTTP gateway or inspects the resolved OAuth portal configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IFROF

//! # IFROF Login Gateway CLI
//!
//! ## Usage
//!
//! ```bash
//! # Serve the gateway (reads HTTP_PORT, BASE_URL, VITE_OAUTH_PORTAL_URL, VITE_APP_ID)
//! cargo run --bin ifrof-auth -- serve
//!
//! # Override port and log level
//! cargo run --bin ifrof-auth -- serve --port 9000 --log-level debug
//!
//! # Print the portal sign-in URL for a redirect target
//! cargo run --bin ifrof-auth -- login-url --return-to https://ifrof.com/api/oauth/callback
//!
//! # Show the resolved OAuth configuration
//! cargo run --bin ifrof-auth -- config
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use ifrof_auth::config::environment::{LogLevel, ServerConfig};
use ifrof_auth::{cli, logging, server};

#[derive(Parser)]
#[command(
    name = "ifrof-auth",
    version,
    about = "IFROF marketplace login gateway",
    long_about = "Redirects users to the OAuth identity portal and reports sign-in availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP gateway
    Serve {
        /// HTTP port override
        #[arg(long)]
        port: Option<u16>,

        /// Log level override (error, warn, info, debug, trace)
        #[arg(long)]
        log_level: Option<String>,
    },
    /// Print the portal sign-in URL
    LoginUrl {
        /// Redirect target; defaults to the callback on BASE_URL
        #[arg(long)]
        return_to: Option<String>,
    },
    /// Print the resolved OAuth configuration as JSON
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let mut config = ServerConfig::from_env()?;

    match args.command {
        Command::Serve { port, log_level } => {
            if let Some(port) = port {
                config.http_port = port;
            }
            if let Some(level) = log_level {
                config.logging.level = LogLevel::from_str_or_default(&level);
            }
            logging::init(&config.logging)?;
            config.log_summary();
            server::run(config).await?;
        }
        Command::LoginUrl { return_to } => {
            println!("{}", cli::login_url(&config, return_to.as_deref())?);
        }
        Command::Config => {
            let report = cli::config_report(&config);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
