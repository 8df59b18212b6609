use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A profile link shown as an icon in the header (`/data/social.json`).
/// Shared across locales; only the tooltip is localized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub key: String,
    pub href: String,
    pub icon: String,
    pub title_en: String,
    pub title_ru: String,
}

impl SocialLink {
    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.title_en,
            Locale::Ru => &self.title_ru,
        }
    }

    /// Only absolute web URLs are valid `sameAs` targets in structured data.
    pub fn is_web_url(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialData {
    pub links: Vec<SocialLink>,
}
