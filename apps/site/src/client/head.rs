//! Imperative document-head updates for client-side locale switches.
//!
//! The browser binding implements [`HeadUpdater`] over the live DOM;
//! [`MemoryHead`] is the in-process implementation used to check what a
//! switch leaves behind.

use crate::models::hydration::script_safe_json;
use crate::render::head::{HeadMetadata, MetaAttr};

pub trait HeadUpdater {
    fn set_title(&mut self, title: &str);
    fn set_lang(&mut self, lang: &str);
    /// Creates `<meta {attr}="{key}">` if missing, then sets its content.
    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str);
    /// `hreflang: None` addresses only links without an `hreflang` attribute.
    fn upsert_link(&mut self, rel: &str, hreflang: Option<&str>, href: &str);
    fn upsert_json_ld(&mut self, id: &str, json: &str);
}

/// Pushes every piece of `head` into `target`. Idempotent.
pub fn apply_head(head: &HeadMetadata, target: &mut dyn HeadUpdater) {
    target.set_title(&head.title);
    target.set_lang(head.lang);
    for meta in &head.metas {
        target.upsert_meta(meta.attr, meta.key, &meta.content);
    }
    for link in &head.links {
        target.upsert_link(link.rel, link.hreflang, &link.href);
    }
    for block in &head.json_ld {
        target.upsert_json_ld(block.id, &script_safe_json(&block.data));
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MetaElement {
    attr: MetaAttr,
    key: String,
    content: String,
}

#[derive(Debug, Clone, PartialEq)]
struct LinkElement {
    rel: String,
    hreflang: Option<String>,
    href: String,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryHead {
    pub title: String,
    pub lang: String,
    metas: Vec<MetaElement>,
    links: Vec<LinkElement>,
    scripts: Vec<(String, String)>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }

    pub fn link(&self, rel: &str, hreflang: Option<&str>) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == rel && l.hreflang.as_deref() == hreflang)
            .map(|l| l.href.as_str())
    }

    pub fn json_ld(&self, id: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|(script_id, _)| script_id == id)
            .map(|(_, json)| json.as_str())
    }

    pub fn meta_count(&self) -> usize {
        self.metas.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl HeadUpdater for MemoryHead {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) {
        match self.metas.iter_mut().find(|m| m.attr == attr && m.key == key) {
            Some(existing) => existing.content = content.to_string(),
            None => self.metas.push(MetaElement {
                attr,
                key: key.to_string(),
                content: content.to_string(),
            }),
        }
    }

    fn upsert_link(&mut self, rel: &str, hreflang: Option<&str>, href: &str) {
        match self
            .links
            .iter_mut()
            .find(|l| l.rel == rel && l.hreflang.as_deref() == hreflang)
        {
            Some(existing) => existing.href = href.to_string(),
            None => self.links.push(LinkElement {
                rel: rel.to_string(),
                hreflang: hreflang.map(str::to_string),
                href: href.to_string(),
            }),
        }
    }

    fn upsert_json_ld(&mut self, id: &str, json: &str) {
        match self.scripts.iter_mut().find(|(script_id, _)| script_id == id) {
            Some((_, existing)) => *existing = json.to_string(),
            None => self.scripts.push((id.to_string(), json.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_apply_is_idempotent() {
        let mut head = MemoryHead::new();
        let meta = HeadMetadata::build(Locale::En, &[]);
        apply_head(&meta, &mut head);
        let (metas, links) = (head.meta_count(), head.link_count());
        apply_head(&meta, &mut head);
        assert_eq!(head.meta_count(), metas);
        assert_eq!(head.link_count(), links);
        assert_eq!(links, 4);
    }

    #[test]
    fn test_canonical_does_not_clobber_hreflang_links() {
        let mut head = MemoryHead::new();
        head.upsert_link("alternate", Some("en"), "https://a/en/");
        head.upsert_link("canonical", None, "https://a/ru/");
        head.upsert_link("canonical", None, "https://a/en/");
        assert_eq!(head.link("canonical", None), Some("https://a/en/"));
        assert_eq!(head.link("alternate", Some("en")), Some("https://a/en/"));
        assert_eq!(head.link_count(), 2);
    }
}
