use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults match a local `dist/` build.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Root of the bundled static-asset store (client build output + `data/`).
    pub assets_dir: PathBuf,
    /// Explicit build manifest path. Discovered under `assets_dir` when unset.
    pub manifest_path: Option<PathBuf>,
    /// Dev bundler origin (e.g. `http://127.0.0.1:5173`) tried when a file is
    /// missing from the asset store.
    pub dev_server_url: Option<String>,
    /// Header carrying the client's country code, set by the CDN in front of us.
    pub country_header: String,
    pub render_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            assets_dir: optional_env("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist")),
            manifest_path: optional_env("MANIFEST_PATH").map(PathBuf::from),
            dev_server_url: optional_env("DEV_SERVER_URL"),
            country_header: optional_env("COUNTRY_HEADER")
                .unwrap_or_else(|| "cf-ipcountry".to_string())
                .to_ascii_lowercase(),
            render_timeout: Duration::from_millis(
                std::env::var("RENDER_TIMEOUT_MS")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse::<u64>()
                    .context("RENDER_TIMEOUT_MS must be a number of milliseconds")?,
            ),
        })
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
