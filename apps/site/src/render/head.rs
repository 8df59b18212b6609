//! Document head metadata for a locale.
//!
//! [`HeadMetadata`] is built once from the content record and is consumed
//! two ways: rendered into the server shell, and applied tag by tag through
//! a `HeadUpdater` when the client switches locale.

use maud::{html, Markup, PreEscaped};
use serde_json::{json, Value};

use crate::content::{content, SITE_URL};
use crate::locale::Locale;
use crate::models::hydration::script_safe_json;
use crate::models::social::SocialLink;

pub const PERSON_SCHEMA_ID: &str = "schema-person";
pub const PROFILE_SCHEMA_ID: &str = "schema-profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkTag {
    pub rel: &'static str,
    pub hreflang: Option<&'static str>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonLdBlock {
    pub id: &'static str,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadMetadata {
    pub title: String,
    pub lang: &'static str,
    pub metas: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
    pub json_ld: Vec<JsonLdBlock>,
}

fn meta(attr: MetaAttr, key: &'static str, content: &str) -> MetaTag {
    MetaTag {
        attr,
        key,
        content: content.to_string(),
    }
}

impl HeadMetadata {
    /// `social` feeds the `sameAs` list of the Person schema; only web URLs
    /// are kept.
    pub fn build(locale: Locale, social: &[SocialLink]) -> Self {
        let record = content(locale);
        let m = &record.meta;

        let metas = vec![
            meta(MetaAttr::Name, "description", m.description),
            meta(MetaAttr::Name, "keywords", m.keywords),
            meta(MetaAttr::Name, "robots", "index,follow"),
            meta(MetaAttr::Property, "og:title", m.title),
            meta(MetaAttr::Property, "og:description", m.description),
            meta(MetaAttr::Property, "og:type", "website"),
            meta(MetaAttr::Property, "og:url", m.og_url),
            meta(MetaAttr::Property, "og:image", m.og_image),
            meta(MetaAttr::Name, "twitter:card", "summary_large_image"),
            meta(MetaAttr::Name, "twitter:title", m.title),
            meta(MetaAttr::Name, "twitter:description", m.twitter_description),
            meta(MetaAttr::Name, "twitter:image", m.og_image),
        ];

        let en_root = format!("{SITE_URL}{}", Locale::En.root_path());
        let ru_root = format!("{SITE_URL}{}", Locale::Ru.root_path());
        let links = vec![
            LinkTag {
                rel: "canonical",
                hreflang: None,
                href: m.canonical.to_string(),
            },
            LinkTag {
                rel: "alternate",
                hreflang: Some("en"),
                href: en_root.clone(),
            },
            LinkTag {
                rel: "alternate",
                hreflang: Some("ru"),
                href: ru_root,
            },
            LinkTag {
                rel: "alternate",
                hreflang: Some("x-default"),
                href: en_root,
            },
        ];

        let same_as: Vec<&str> = social
            .iter()
            .filter(|l| l.is_web_url())
            .map(|l| l.href.as_str())
            .collect();

        let json_ld = vec![
            JsonLdBlock {
                id: PERSON_SCHEMA_ID,
                data: json!({
                    "@context": "https://schema.org",
                    "@type": "Person",
                    "name": record.name,
                    "url": m.canonical,
                    "image": m.og_image,
                    "jobTitle": record.role,
                    "sameAs": same_as,
                }),
            },
            JsonLdBlock {
                id: PROFILE_SCHEMA_ID,
                data: json!({
                    "@context": "https://schema.org",
                    "@type": "ProfilePage",
                    "name": m.title,
                    "url": m.canonical,
                    "about": {
                        "@type": "Person",
                        "name": record.name,
                    },
                }),
            },
        ];

        Self {
            title: m.title.to_string(),
            lang: record.html_lang,
            metas,
            links,
            json_ld,
        }
    }

    /// `<title>`, meta tags, canonical and alternate links.
    pub fn render_tags(&self) -> Markup {
        html! {
            title { (self.title) }
            @for tag in &self.metas {
                @match tag.attr {
                    MetaAttr::Name => { meta name=(tag.key) content=(tag.content); }
                    MetaAttr::Property => { meta property=(tag.key) content=(tag.content); }
                }
            }
            @for link in &self.links {
                link rel=(link.rel) hreflang=[link.hreflang] href=(link.href);
            }
        }
    }

    pub fn render_json_ld(&self) -> Markup {
        html! {
            @for block in &self.json_ld {
                script type="application/ld+json" id=(block.id) {
                    (PreEscaped(script_safe_json(&block.data)))
                }
            }
        }
    }

    pub fn meta_content(&self, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_social_json;

    fn social() -> Vec<SocialLink> {
        serde_json::from_str::<crate::models::social::SocialData>(&sample_social_json())
            .unwrap()
            .links
    }

    #[test]
    fn test_one_canonical_three_alternates() {
        let head = HeadMetadata::build(Locale::Ru, &[]);
        let canonical: Vec<_> = head.links.iter().filter(|l| l.rel == "canonical").collect();
        let alternates: Vec<_> = head.links.iter().filter(|l| l.rel == "alternate").collect();
        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical[0].href, "https://roman.stolyarch.uk/ru/");
        let langs: Vec<_> = alternates.iter().filter_map(|l| l.hreflang).collect();
        assert_eq!(langs, vec!["en", "ru", "x-default"]);
        assert_eq!(alternates[2].href, "https://roman.stolyarch.uk/en/");
    }

    #[test]
    fn test_meta_follows_locale() {
        let en = HeadMetadata::build(Locale::En, &[]);
        let ru = HeadMetadata::build(Locale::Ru, &[]);
        assert_eq!(en.lang, "en");
        assert_eq!(ru.lang, "ru");
        assert_eq!(ru.meta_content("og:title"), Some(ru.title.as_str()));
        assert_eq!(ru.meta_content("og:url"), Some("https://roman.stolyarch.uk/ru/"));
        assert_ne!(en.meta_content("twitter:title"), ru.meta_content("twitter:title"));
    }

    #[test]
    fn test_same_as_only_web_urls() {
        let head = HeadMetadata::build(Locale::En, &social());
        let person = &head.json_ld[0];
        assert_eq!(person.id, PERSON_SCHEMA_ID);
        assert_eq!(person.data["sameAs"], json!(["https://github.com/example"]));
        assert_eq!(person.data["jobTitle"], "IT Engineer");
        assert_eq!(head.json_ld[1].data["@type"], "ProfilePage");
    }

    #[test]
    fn test_rendered_tags_escape_content() {
        let head = HeadMetadata::build(Locale::En, &[]);
        let html = head.render_tags().into_string();
        assert!(html.contains("<title>Roman Stolyarchuk — C++/Python Software Engineer | CV</title>"));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://roman.stolyarch.uk/en/">"#));
        assert!(html.contains(r#"<link rel="alternate" hreflang="x-default" href="https://roman.stolyarch.uk/en/">"#));
        assert_eq!(html.matches("rel=\"canonical\"").count(), 1);
    }
}
