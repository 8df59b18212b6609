use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::models::job::JobEntry;
use crate::models::social::SocialLink;

/// Per-request data handed from the server render to the client view.
///
/// Serialized into the page as `window.__INITIAL_DATA__`. A `None` field
/// means the server could not load that document; it is emitted as `null`
/// so the client knows to fetch it itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialData {
    pub locale: Locale,
    pub jobs: Option<Vec<JobEntry>>,
    pub social: Option<Vec<SocialLink>>,
}

impl InitialData {
    /// JSON safe to inline in a `<script>` element: `<` cannot close the tag.
    pub fn to_script_json(&self) -> String {
        escape_script(serde_json::to_string(self).unwrap_or_else(|_| "null".to_string()))
    }
}

/// Serializes a JSON value for embedding in HTML `<script>` content.
pub fn script_safe_json(value: &serde_json::Value) -> String {
    escape_script(value.to_string())
}

fn escape_script(json: String) -> String {
    json.replace('<', "\\u003c")
}
