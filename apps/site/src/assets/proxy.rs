//! Dev-server fallback for file requests.
//!
//! During local development the client bundle is served by the bundler's
//! dev server rather than from `dist/`. When a file is missing from the
//! asset store and `DEV_SERVER_URL` is set, the request is replayed there.

use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::Response,
};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

const PROXY_TIMEOUT: Duration = Duration::from_secs(10);

/// Request headers never replayed upstream: hop-by-hop headers, plus
/// `accept-encoding` so the dev server answers with identity bodies.
const SKIPPED_REQUEST_HEADERS: &[&str] = &[
    "host",
    "accept-encoding",
    "connection",
    "keep-alive",
    "te",
    "transfer-encoding",
    "upgrade",
];

/// Response headers worth carrying back from the dev server.
const FORWARDED_RESPONSE_HEADERS: &[&str] = &[
    "content-type",
    "content-encoding",
    "cache-control",
    "etag",
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unsupported method for proxying: {0}")]
    Method(String),

    #[error("Invalid response from dev server: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct DevProxy {
    client: Client,
    origin: String,
}

impl DevProxy {
    pub fn new(origin: impl Into<String>) -> Result<Self, ProxyError> {
        Ok(Self {
            client: Client::builder().timeout(PROXY_TIMEOUT).build()?,
            origin: origin.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Target URL on the dev server for an incoming request URI.
    pub fn target_url(&self, uri: &Uri) -> String {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("{}{}", self.origin, path_and_query)
    }

    /// Replays the request against the dev server. `Ok(None)` means the dev
    /// server answered but not with a success status.
    pub async fn forward(
        &self,
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
    ) -> Result<Option<Response>, ProxyError> {
        let method = reqwest::Method::from_bytes(method.as_str().as_bytes())
            .map_err(|_| ProxyError::Method(method.to_string()))?;
        let url = self.target_url(uri);

        let mut request = self.client.request(method, &url);
        for (name, value) in headers {
            if SKIPPED_REQUEST_HEADERS.contains(&name.as_str()) {
                continue;
            }
            request = request.header(name.as_str(), value.as_bytes());
        }

        let upstream = request.send().await?;
        let status = upstream.status();
        if !status.is_success() {
            debug!("Dev server returned {} for {}", status, url);
            return Ok(None);
        }

        let mut forwarded = Vec::new();
        for name in FORWARDED_RESPONSE_HEADERS {
            if let Some(value) = upstream.headers().get(*name) {
                let value = HeaderValue::from_bytes(value.as_bytes())
                    .map_err(|e| ProxyError::InvalidResponse(e.to_string()))?;
                forwarded.push((*name, value));
            }
        }
        let body = upstream.bytes().await?;

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = StatusCode::from_u16(status.as_u16())
            .map_err(|e| ProxyError::InvalidResponse(e.to_string()))?;
        for (name, value) in forwarded {
            response.headers_mut().insert(name, value);
        }
        Ok(Some(response))
    }
}
