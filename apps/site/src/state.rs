use std::sync::Arc;

use crate::assets::{AssetStore, DevProxy, Manifest};
use crate::config::Config;
use crate::data::DataFetcher;
use crate::render::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub assets: Arc<dyn AssetStore>,
    pub data: DataFetcher,
    pub manifest: Arc<Manifest>,
    /// Pluggable body renderer. Default: ViewRenderer.
    pub renderer: Arc<dyn PageRenderer>,
    /// Present only when DEV_SERVER_URL is configured.
    pub dev_proxy: Option<DevProxy>,
}

impl AppState {
    pub fn new(
        config: Config,
        assets: Arc<dyn AssetStore>,
        manifest: Manifest,
        renderer: Arc<dyn PageRenderer>,
        dev_proxy: Option<DevProxy>,
    ) -> Self {
        Self {
            data: DataFetcher::new(Arc::clone(&assets)),
            config,
            assets,
            manifest: Arc::new(manifest),
            renderer,
            dev_proxy,
        }
    }
}
