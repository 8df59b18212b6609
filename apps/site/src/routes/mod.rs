pub mod health;
pub mod page;
pub mod redirect;
pub mod static_files;

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::locale::Locale;
use crate::state::AppState;

/// What a request path is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// `/` or `/index.html`: send the visitor to a locale root.
    RootRedirect,
    /// Last path segment looks like a file name.
    StaticFile,
    /// Everything else is a page, in the locale named by the first segment.
    Page(Locale),
}

pub fn classify(path: &str) -> RouteKind {
    if path == "/" || path == "/index.html" {
        return RouteKind::RootRedirect;
    }
    let last = path.rsplit('/').next().unwrap_or_default();
    if last.contains('.') {
        return RouteKind::StaticFile;
    }
    RouteKind::Page(Locale::from_path(path).unwrap_or_default())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .fallback(dispatch)
        .with_state(state)
}

async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path().to_string();
    match classify(&path) {
        RouteKind::RootRedirect => {
            redirect::redirect_to_locale(&state.config, &req).into_response()
        }
        RouteKind::StaticFile => static_files::serve_file(&state, req).await.into_response(),
        RouteKind::Page(locale) => page::render_page(&state, locale, &path).await,
    }
}
