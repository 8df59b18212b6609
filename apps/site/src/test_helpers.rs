//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::json;

use crate::assets::{AssetError, AssetStore};
use crate::config::Config;

/// Defaults as `Config::from_env` would produce them with nothing set.
pub fn test_config() -> Config {
    Config {
        port: 0,
        rust_log: "debug".to_string(),
        assets_dir: PathBuf::from("dist"),
        manifest_path: None,
        dev_server_url: None,
        country_header: "cf-ipcountry".to_string(),
        render_timeout: Duration::from_secs(5),
    }
}

/// Asset store held entirely in memory. `failing()` makes every call return
/// an I/O error, standing in for a broken storage binding.
#[derive(Default, Clone)]
pub struct MemoryAssetStore {
    files: HashMap<String, Bytes>,
    failing: bool,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files
            .insert(normalize(path), Bytes::from(contents.to_string()));
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn check(&self, path: &str) -> Result<(), AssetError> {
        if self.failing {
            return Err(AssetError::Io {
                path: path.to_string(),
                source: std::io::Error::other("storage binding unavailable"),
            });
        }
        Ok(())
    }
}

fn normalize(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

fn content_type(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn get(&self, path: &str) -> Result<Option<Bytes>, AssetError> {
        self.check(path)?;
        Ok(self.files.get(&normalize(path)).cloned())
    }

    async fn serve(&self, req: Request<Body>) -> Result<Response, AssetError> {
        let path = req.uri().path().to_string();
        self.check(&path)?;
        Ok(match self.files.get(&normalize(&path)) {
            Some(contents) => (
                [(header::CONTENT_TYPE, content_type(&path))],
                contents.clone(),
            )
                .into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        })
    }
}

/// Serves `router` on an ephemeral localhost port and returns its origin.
pub async fn spawn_upstream(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A one-job work-history document whose only job is titled `title`.
pub fn sample_jobs_json(title: &str) -> String {
    json!({
        "jobs": [{
            "title": title,
            "sector": "Telecommunications",
            "location": "Moscow",
            "dates": "2019 - 2024",
            "sections": [{
                "heading": "Responsibilities",
                "bullets": [
                    "Maintained the <VoIP> switching core",
                    {
                        "text": "Published tooling:",
                        "links": [
                            { "label": "sipper", "href": "https://github.com/example/sipper" },
                            { "label": "rtp-dump", "href": "https://github.com/example/rtp-dump" }
                        ]
                    }
                ]
            }]
        }]
    })
    .to_string()
}

pub fn sample_social_json() -> String {
    json!({
        "links": [
            {
                "key": "github",
                "href": "https://github.com/example",
                "icon": "iconoir-github",
                "titleEn": "GitHub profile",
                "titleRu": "Профиль GitHub"
            },
            {
                "key": "email",
                "href": "mailto:me@example.com",
                "icon": "iconoir-mail",
                "titleEn": "Email",
                "titleRu": "Почта"
            }
        ]
    })
    .to_string()
}

pub const SAMPLE_MANIFEST: &str =
    r#"{"index.html": {"file": "assets/index-abc123.js", "css": ["assets/index-abc123.css"]}}"#;

/// A store holding a complete build: both job documents, social links and
/// the hashed client bundle named by [`SAMPLE_MANIFEST`].
pub fn full_store() -> MemoryAssetStore {
    MemoryAssetStore::new()
        .with_file("/data/en.json", &sample_jobs_json("Senior Engineer"))
        .with_file("/data/ru.json", &sample_jobs_json("Ведущий инженер"))
        .with_file("/data/social.json", &sample_social_json())
        .with_file("/assets/index-abc123.js", "console.log('hydrate')")
        .with_file("/assets/index-abc123.css", "body{}")
        .with_file("/robots.txt", "User-agent: *")
}
