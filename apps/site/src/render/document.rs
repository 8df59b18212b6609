//! The HTML shell around the rendered app body.
//!
//! The shell is split at `<div id="root">`: everything before it (doctype,
//! head, structured data, hydration payload) is the prefix, the closing
//! root div plus the client script tag is the suffix. The app body streams
//! in between.

use bytes::Bytes;
use maud::{html, PreEscaped};

use crate::assets::resolver::ClientAssets;
use crate::models::hydration::InitialData;
use crate::render::head::HeadMetadata;

pub const SITE_STYLESHEET: &str = "/assets/roman-stolyarchuk.css";
pub const ICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/iconoir-icons/iconoir@main/css/iconoir.css";
const FONT_STYLESHEETS: &[&str] = &[
    "https://fonts.googleapis.com/css?family=Inter:400,700&display=swap",
    "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;600;700&display=swap",
];

/// Body placed in the root element when rendering fails.
pub const RENDER_ERROR_PLACEHOLDER: &str = "<div>Rendering error</div>";

#[derive(Debug, Clone)]
pub struct Document {
    prefix: Bytes,
    suffix: Bytes,
}

impl Document {
    pub fn new(head: &HeadMetadata, assets: &ClientAssets, initial: &InitialData) -> Self {
        let hydration = format!(
            "window.__INITIAL_LOCALE__ = \"{}\"; window.__INITIAL_DATA__ = {}",
            initial.locale,
            initial.to_script_json()
        );

        let head_markup = html! {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            (head.render_tags())
            link rel="stylesheet" href=(SITE_STYLESHEET);
            link rel="stylesheet" href=(ICON_STYLESHEET);
            link rel="preconnect" href="https://fonts.googleapis.com";
            link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
            @for href in FONT_STYLESHEETS {
                link rel="stylesheet" href=(href);
            }
            @for href in &assets.stylesheets {
                link rel="stylesheet" href=(href);
            }
            (head.render_json_ld())
            script { (PreEscaped(hydration)) }
        };

        let prefix = format!(
            "<!doctype html><html lang=\"{}\"><head>{}</head><body><div id=\"root\">",
            head.lang,
            head_markup.into_string()
        );

        let script_tag = html! {
            script type="module" src=(assets.script) {}
        };
        let suffix = format!("</div>{}</body></html>", script_tag.into_string());

        Self {
            prefix: Bytes::from(prefix),
            suffix: Bytes::from(suffix),
        }
    }

    pub fn prefix(&self) -> Bytes {
        self.prefix.clone()
    }

    pub fn suffix(&self) -> Bytes {
        self.suffix.clone()
    }

    /// Complete document with the error placeholder as its body. Keeps the
    /// locale's metadata so even a failed render is a valid page.
    pub fn fallback(&self) -> Bytes {
        let mut out =
            Vec::with_capacity(self.prefix.len() + RENDER_ERROR_PLACEHOLDER.len() + self.suffix.len());
        out.extend_from_slice(&self.prefix);
        out.extend_from_slice(RENDER_ERROR_PLACEHOLDER.as_bytes());
        out.extend_from_slice(&self.suffix);
        Bytes::from(out)
    }
}
