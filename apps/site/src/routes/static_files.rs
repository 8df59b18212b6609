use axum::{
    extract::Request,
    http::StatusCode,
    response::Response,
};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// File requests: asset store first, then the dev server if one is
/// configured, then an empty 404.
pub async fn serve_file(state: &AppState, req: Request) -> Result<Response, AppError> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let headers = req.headers().clone();

    match state.assets.serve(req).await {
        Ok(resp) if resp.status().is_success() || resp.status() == StatusCode::NOT_MODIFIED => {
            return Ok(resp);
        }
        Ok(resp) => debug!("Asset store returned {} for {}", resp.status(), uri.path()),
        Err(e) => warn!("Asset store failed for {}: {e}", uri.path()),
    }

    if let Some(proxy) = &state.dev_proxy {
        match proxy.forward(&method, &uri, &headers).await {
            Ok(Some(resp)) => {
                debug!("Served {} from dev server {}", uri.path(), proxy.origin());
                return Ok(resp);
            }
            Ok(None) => {}
            Err(e) => debug!("Dev server fallback failed for {}: {e}", uri.path()),
        }
    }

    Err(AppError::NotFound)
}
