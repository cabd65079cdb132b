//! Tidepool CLI - a command-line client for the Tidepool health-data
//! platform.
//!
//! One invocation performs the requested operations in order: ping, login,
//! upload, query, logout. The session token is held in memory only.

mod api;
mod auth;
mod cli;
mod config;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::TidepoolClient;
use cli::Cli;
use config::Endpoints;

/// Environment variable overriding the per-environment platform host.
const SERVER_URL_ENV: &str = "TIDEPOOL_SERVER_URL";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let endpoints = match std::env::var(SERVER_URL_ENV) {
        Ok(host) if !host.is_empty() => Endpoints::with_host(&host),
        _ => Endpoints::for_environment(cli.server),
    };
    info!(auth = %endpoints.auth, "selected platform endpoints");

    let mut client = TidepoolClient::new(endpoints).context("failed to build HTTP client")?;

    if cli.ping {
        client.ping().await.context("platform status check failed")?;
        println!("platform is up");
    }

    if let Some(ref email) = cli.login {
        let password = rpassword::prompt_password(format!("Password for {email}: "))
            .context("failed to read password")?;
        client.login(email, &password).await.context("login failed")?;
    }

    if let Some(ref path) = cli.upload {
        let items = read_data_blocks(path)
            .with_context(|| format!("failed to read data blocks from {}", path.display()))?;
        client.upload(&items).await.context("upload failed")?;
        println!("uploaded {} data blocks", items.len());
    }

    if let Some(ref payload) = cli.query {
        let rows = client.query(payload).await.context("query failed")?;
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }

    if client.is_authenticated() {
        if cli.no_logout {
            println!("session left open; token: {}", client.token());
        } else {
            client.logout().await.context("logout failed")?;
        }
    }

    Ok(())
}

/// Read a JSON array of opaque data blocks from a file, or stdin for "-".
fn read_data_blocks(path: &Path) -> Result<Vec<serde_json::Value>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    let items: Vec<serde_json::Value> =
        serde_json::from_str(&raw).context("input is not a JSON array")?;
    Ok(items)
}
