use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use thiserror::Error;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset path rejected: {0}")]
    InvalidPath(String),

    #[error("I/O error reading asset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only store of the files produced by the client build.
///
/// Paths are URL paths (`/data/en.json`, `assets/index-abc.js`); a leading
/// slash is optional. Implementations must be cheap to share across requests.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Returns the file contents, or `None` when the path is not in the store.
    async fn get(&self, path: &str) -> Result<Option<Bytes>, AssetError>;

    async fn exists(&self, path: &str) -> Result<bool, AssetError> {
        Ok(self.get(path).await?.is_some())
    }

    /// Serves a request directly from the store. A non-success status means
    /// the asset is unavailable and the caller may try something else.
    async fn serve(&self, req: Request<Body>) -> Result<Response, AssetError>;
}

/// Asset store backed by a directory on disk (normally the `dist/` build output).
#[derive(Clone)]
pub struct FsAssetStore {
    root: PathBuf,
    serve_dir: ServeDir,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            serve_dir: ServeDir::new(&root),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a URL path onto the store root, refusing anything that could
    /// escape it.
    fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(AssetError::InvalidPath(path.to_string()));
                }
            }
        }
        if resolved == self.root {
            return Err(AssetError::InvalidPath(path.to_string()));
        }
        Ok(resolved)
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn get(&self, path: &str) -> Result<Option<Bytes>, AssetError> {
        let file = self.resolve(path)?;
        match tokio::fs::read(&file).await {
            Ok(contents) => Ok(Some(Bytes::from(contents))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Asset not found: {}", file.display());
                Ok(None)
            }
            Err(source) => Err(AssetError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }

    async fn exists(&self, path: &str) -> Result<bool, AssetError> {
        let file = self.resolve(path)?;
        match tokio::fs::metadata(&file).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AssetError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }

    async fn serve(&self, req: Request<Body>) -> Result<Response, AssetError> {
        // ServeDir's error type is Infallible; I/O problems come back as 5xx.
        let response = match self.serve_dir.clone().oneshot(req).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        Ok(response.map(Body::new).into_response())
    }
}
