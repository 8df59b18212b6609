//! Build manifest produced by the client bundler: logical entry name →
//! hashed output file plus the stylesheets it pulls in.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Logical entry the page shell loads.
pub const CLIENT_ENTRY: &str = "index.html";
/// Used when the manifest names no usable entry at all.
pub const DEFAULT_CLIENT_SCRIPT: &str = "assets/index.js";

/// Where bundlers put the manifest, relative to the asset root, in lookup order.
const MANIFEST_CANDIDATES: &[&str] = &[
    "manifest.json",
    ".vite/manifest.json",
    "client/manifest.json",
    "client/.vite/manifest.json",
];

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub css: Vec<String>,
}

/// Entries are kept in key order so the "first entry" fallback is stable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the manifest from `explicit` if given, otherwise from the first
    /// well-known location under `assets_dir`. Never fails: a missing or
    /// broken manifest yields an empty one and the default script path.
    pub fn discover(assets_dir: &Path, explicit: Option<&Path>) -> Self {
        let candidates: Vec<PathBuf> = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => MANIFEST_CANDIDATES
                .iter()
                .map(|c| assets_dir.join(c))
                .collect(),
        };

        for path in candidates.iter().filter(|p| p.is_file()) {
            match Self::load(path) {
                Ok(manifest) => {
                    info!(
                        "Loaded build manifest from {} ({} entries)",
                        path.display(),
                        manifest.entries.len()
                    );
                    return manifest;
                }
                Err(e) => warn!("{e}"),
            }
        }

        warn!(
            "No usable build manifest found; client script falls back to /{}",
            DEFAULT_CLIENT_SCRIPT
        );
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `index.html` when it names a file, else the first entry that does.
    pub fn client_entry(&self) -> Option<&ManifestEntry> {
        self.entries
            .get(CLIENT_ENTRY)
            .filter(|e| !e.file.is_empty())
            .or_else(|| self.entries.values().find(|e| !e.file.is_empty()))
    }

    /// Manifest-relative path of the client script (no leading slash).
    pub fn client_script_file(&self) -> &str {
        self.client_entry()
            .map(|e| e.file.as_str())
            .unwrap_or(DEFAULT_CLIENT_SCRIPT)
    }

    /// Root-relative hrefs of the client entry's stylesheets.
    pub fn stylesheets(&self) -> Vec<String> {
        self.client_entry()
            .map(|e| e.css.iter().map(|c| absolute(c)).collect())
            .unwrap_or_default()
    }
}

pub(crate) fn absolute(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_entry_script_and_css() {
        let m = Manifest::from_json(
            r#"{"index.html": {"file": "assets/index-abc123.js", "css": ["assets/index-abc123.css"]}}"#,
        )
        .unwrap();
        assert_eq!(m.client_script_file(), "assets/index-abc123.js");
        assert_eq!(m.stylesheets(), vec!["/assets/index-abc123.css"]);
    }

    #[test]
    fn test_first_entry_when_index_missing() {
        let m = Manifest::from_json(
            r#"{
                "src/main.tsx": {"file": "assets/main-111.js", "isEntry": true, "src": "src/main.tsx"},
                "src/zz.tsx": {"file": "assets/zz-222.js"}
            }"#,
        )
        .unwrap();
        assert_eq!(m.client_script_file(), "assets/main-111.js");
        assert!(m.stylesheets().is_empty());
    }

    #[test]
    fn test_empty_manifest_uses_default() {
        let m = Manifest::default();
        assert_eq!(m.client_script_file(), DEFAULT_CLIENT_SCRIPT);
        assert!(m.stylesheets().is_empty());
    }

    #[test]
    fn test_entry_without_file_is_skipped() {
        let m = Manifest::from_json(
            r#"{"index.html": {"css": ["a.css"]}, "other": {"file": "assets/o.js"}}"#,
        )
        .unwrap();
        assert_eq!(m.client_script_file(), "assets/o.js");
    }

    #[test]
    fn test_discover_prefers_first_candidate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".vite")).unwrap();
        std::fs::write(
            dir.path().join(".vite/manifest.json"),
            r#"{"index.html": {"file": "assets/vite.js"}}"#,
        )
        .unwrap();

        let m = Manifest::discover(dir.path(), None);
        assert_eq!(m.client_script_file(), "assets/vite.js");

        std::fs::write(
            dir.path().join("manifest.json"),
            r#"{"index.html": {"file": "assets/root.js"}}"#,
        )
        .unwrap();
        let m = Manifest::discover(dir.path(), None);
        assert_eq!(m.client_script_file(), "assets/root.js");
    }

    #[test]
    fn test_discover_survives_broken_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "not json").unwrap();

        let m = Manifest::discover(dir.path(), Some(&path));
        assert_eq!(m.len(), 0);
        assert!(matches!(
            Manifest::load(&path),
            Err(ManifestError::Parse { .. })
        ));
    }
}
