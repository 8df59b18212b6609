use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::assets::resolver::resolve_client_assets;
use crate::data::FetchError;
use crate::locale::Locale;
use crate::models::hydration::InitialData;
use crate::render::{compose, Document, HeadMetadata, RenderError, ViewModel};
use crate::state::AppState;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// GET /{locale}/... → server-rendered page.
///
/// Never fails: missing data degrades the page, and a render failure or
/// timeout turns into the fallback document with a 500.
pub async fn render_page(state: &AppState, locale: Locale, path: &str) -> Response {
    let render_id = Uuid::new_v4();
    let span = info_span!("render", %render_id, %locale, path);

    async move {
        // Independent suspension points; joined before anything is written.
        let (jobs, social, assets) = tokio::join!(
            state.data.fetch_jobs(locale),
            state.data.fetch_social(),
            resolve_client_assets(state.assets.as_ref(), &state.manifest),
        );

        let initial = InitialData {
            locale,
            jobs: degrade("work history", jobs),
            social: degrade("social links", social),
        };
        let head = HeadMetadata::build(locale, initial.social.as_deref().unwrap_or_default());
        let document = Document::new(&head, &assets, &initial);
        let view = Arc::new(ViewModel::from_initial(&initial));

        match compose(
            state.renderer.as_ref(),
            view,
            &document,
            state.config.render_timeout,
        )
        .await
        {
            Ok(stream) => {
                info!("Streaming page");
                html_response(StatusCode::OK, Body::from_stream(stream))
            }
            Err(e) => {
                match &e {
                    RenderError::Timeout(_) => warn!("{e}, serving fallback document"),
                    RenderError::View(_) => error!("Render failed, serving fallback document: {e}"),
                }
                html_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Body::from(document.fallback()),
                )
            }
        }
    }
    .instrument(span)
    .await
}

/// A failed data fetch leaves a hole in the page rather than failing it.
fn degrade<T>(what: &str, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Rendering without {what}: {e}");
            None
        }
    }
}

fn html_response(status: StatusCode, body: Body) -> Response {
    (status, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], body).into_response()
}
