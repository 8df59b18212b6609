use anyhow::Context;
use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;
use crate::locale::{resolve_request_locale, Locale};

/// Target of the root redirect: the locale root with the query string
/// carried over verbatim.
pub fn redirect_target(locale: Locale, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{}?{}", locale.root_path(), query),
        None => locale.root_path().to_string(),
    }
}

/// GET / and /index.html → 302 to `/en/` or `/ru/`.
pub fn redirect_to_locale(config: &Config, req: &Request) -> Result<Response, AppError> {
    let headers = req.headers();
    let country = headers
        .get(config.country_header.as_str())
        .and_then(|v| v.to_str().ok());
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let locale = resolve_request_locale(country, accept_language);
    let target = redirect_target(locale, req.uri().query());
    debug!(
        "Root redirect to {target} (country={:?}, accept-language={:?})",
        country, accept_language
    );

    let location = HeaderValue::from_str(&target)
        .with_context(|| format!("Redirect target is not a valid header value: {target}"))?;
    let vary = HeaderValue::from_str(&format!("{}, accept-language", config.country_header))
        .context("COUNTRY_HEADER is not a valid header name")?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, location), (header::VARY, vary)],
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_target_preserves_query() {
        assert_eq!(redirect_target(Locale::Ru, Some("a=1&b=%20")), "/ru/?a=1&b=%20");
        assert_eq!(redirect_target(Locale::En, Some("")), "/en/?");
        assert_eq!(redirect_target(Locale::En, None), "/en/");
    }
}
