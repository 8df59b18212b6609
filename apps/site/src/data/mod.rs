//! Loads the work-history and social-link documents that the page and the
//! client view are rendered from.
//!
//! Both documents are plain JSON files in the asset store, so the server
//! reads exactly what the browser would fetch from `/data/...`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::assets::{AssetError, AssetStore};
use crate::locale::Locale;
use crate::models::job::{JobData, JobEntry};
use crate::models::social::{SocialData, SocialLink};

pub const SOCIAL_DOCUMENT: &str = "/data/social.json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Data document not found: {0}")]
    Missing(String),

    #[error("Asset store error: {0}")]
    Store(#[from] AssetError),

    #[error("Malformed data document '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// URL path of the work-history document for a locale.
pub fn jobs_document(locale: Locale) -> String {
    format!("/data/{}.json", locale.as_str())
}

#[derive(Clone)]
pub struct DataFetcher {
    store: Arc<dyn AssetStore>,
}

impl DataFetcher {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    pub async fn fetch_jobs(&self, locale: Locale) -> Result<Vec<JobEntry>, FetchError> {
        let data: JobData = self.fetch_document(&jobs_document(locale)).await?;
        Ok(data.jobs)
    }

    pub async fn fetch_social(&self) -> Result<Vec<SocialLink>, FetchError> {
        let data: SocialData = self.fetch_document(SOCIAL_DOCUMENT).await?;
        Ok(data.links)
    }

    async fn fetch_document<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let raw = self
            .store
            .get(path)
            .await?
            .ok_or_else(|| FetchError::Missing(path.to_string()))?;

        debug!("Fetched {} ({} bytes)", path, raw.len());

        serde_json::from_slice(&raw).map_err(|source| FetchError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
