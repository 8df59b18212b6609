//! Picks the client script URL to put in the page shell.
//!
//! The manifest path is only trusted once the store confirms it. Deploys
//! have put the bundle under `/assets`, at the root, and under `/dist`, so
//! each layout is probed in turn before giving up on the manifest value.

use tracing::{debug, warn};

use crate::assets::manifest::{absolute, Manifest};
use crate::assets::store::AssetStore;

/// Script and stylesheet hrefs for one page render.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientAssets {
    pub script: String,
    pub stylesheets: Vec<String>,
}

/// Probe order for a manifest file path, duplicates removed.
pub fn script_candidates(file: &str) -> Vec<String> {
    let file = file.trim_start_matches('/');
    let stripped = file.strip_prefix("assets/").unwrap_or(file);
    let basename = file.rsplit('/').next().unwrap_or(file);

    let mut candidates: Vec<String> = Vec::with_capacity(5);
    for candidate in [
        absolute(file),
        absolute(stripped),
        format!("/dist/{file}"),
        format!("/dist/{stripped}"),
        absolute(basename),
    ] {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// First candidate the store actually has; the unmodified manifest path
/// otherwise, accepting a possibly broken link over a failed page.
pub async fn resolve_client_script(store: &dyn AssetStore, manifest: &Manifest) -> String {
    let file = manifest.client_script_file();

    for candidate in script_candidates(file) {
        match store.exists(&candidate).await {
            Ok(true) => {
                debug!("Client script resolved to {candidate}");
                return candidate;
            }
            Ok(false) => {}
            Err(e) => debug!("Probing {candidate} failed: {e}"),
        }
    }

    let fallback = absolute(file);
    warn!("No client script candidate found in asset store; using {fallback}");
    fallback
}

pub async fn resolve_client_assets(store: &dyn AssetStore, manifest: &Manifest) -> ClientAssets {
    ClientAssets {
        script: resolve_client_script(store, manifest).await,
        stylesheets: manifest.stylesheets(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MemoryAssetStore;

    fn manifest() -> Manifest {
        Manifest::from_json(
            r#"{"index.html": {"file": "assets/index-abc123.js", "css": ["assets/index-abc123.css"]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(
            script_candidates("assets/index-abc123.js"),
            vec![
                "/assets/index-abc123.js",
                "/index-abc123.js",
                "/dist/assets/index-abc123.js",
                "/dist/index-abc123.js",
            ]
        );
    }

    #[test]
    fn test_candidates_for_nested_file_include_basename() {
        let c = script_candidates("static/js/app.js");
        assert_eq!(c.first().map(String::as_str), Some("/static/js/app.js"));
        assert_eq!(c.last().map(String::as_str), Some("/app.js"));
        assert_eq!(c.len(), 3);
    }

    #[tokio::test]
    async fn test_manifest_path_used_when_present() {
        let store = MemoryAssetStore::new().with_file("/assets/index-abc123.js", "js");
        let assets = resolve_client_assets(&store, &manifest()).await;
        assert_eq!(assets.script, "/assets/index-abc123.js");
        assert_eq!(assets.stylesheets, vec!["/assets/index-abc123.css"]);
    }

    #[tokio::test]
    async fn test_falls_through_to_dist_layout() {
        let store = MemoryAssetStore::new().with_file("/dist/index-abc123.js", "js");
        assert_eq!(
            resolve_client_script(&store, &manifest()).await,
            "/dist/index-abc123.js"
        );
    }

    #[tokio::test]
    async fn test_unresolved_keeps_manifest_value() {
        let store = MemoryAssetStore::new();
        assert_eq!(
            resolve_client_script(&store, &manifest()).await,
            "/assets/index-abc123.js"
        );
    }
}
