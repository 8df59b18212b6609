mod assets;
mod client;
mod config;
mod content;
mod data;
mod errors;
mod locale;
mod models;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod test_helpers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::{DevProxy, FsAssetStore, Manifest};
use crate::config::Config;
use crate::render::ViewRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting site v{}", env!("CARGO_PKG_VERSION"));

    let assets = Arc::new(FsAssetStore::new(&config.assets_dir));
    info!("Serving static assets from {}", assets.root().display());

    // Missing or unreadable manifest is not fatal: pages fall back to the default bundle path
    let manifest = Manifest::discover(&config.assets_dir, config.manifest_path.as_deref());
    info!("Build manifest loaded ({} entries)", manifest.len());

    let dev_proxy = match &config.dev_server_url {
        Some(origin) => {
            let proxy = DevProxy::new(origin)?;
            info!("Dev server fallback enabled: {}", proxy.origin());
            Some(proxy)
        }
        None => None,
    };

    let state = AppState::new(
        config.clone(),
        assets,
        manifest,
        Arc::new(ViewRenderer),
        dev_proxy,
    );

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
