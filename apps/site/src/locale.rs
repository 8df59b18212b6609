//! Locale resolution: maps a country signal or browser language preference
//! to one of the two supported locales.
//!
//! There is no error path here: missing or unrecognized input resolves to
//! [`Locale::En`].

use std::fmt;

use serde::{Deserialize, Serialize};

const RU_COUNTRY_CODE: &str = "RU";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Canonical root path for the locale. Always carries the trailing slash.
    pub fn root_path(self) -> &'static str {
        match self {
            Locale::En => "/en/",
            Locale::Ru => "/ru/",
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Ru,
            Locale::Ru => Locale::En,
        }
    }

    /// Exact match on a path segment. `EN`, `en-us` and friends are not locales.
    pub fn from_segment(segment: &str) -> Option<Locale> {
        match segment {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Locale named by the first segment of a request path, if any.
    pub fn from_path(path: &str) -> Option<Locale> {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Locale::from_segment)
    }

    /// Country-code policy: the Russian-speaking country maps to `Ru`,
    /// everything else (including no signal at all) maps to `En`.
    pub fn from_country(country: Option<&str>) -> Locale {
        match country {
            Some(code) if code.trim().eq_ignore_ascii_case(RU_COUNTRY_CODE) => Locale::Ru,
            _ => Locale::En,
        }
    }

    /// Browser-preference policy: only the most preferred tag counts, and it
    /// must be `ru` or `ru-*`.
    pub fn from_language_tags<I, S>(tags: I) -> Locale
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match tags.into_iter().next() {
            Some(tag) if is_russian_tag(tag.as_ref()) => Locale::Ru,
            _ => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `^ru\b`, case-insensitive, with ASCII word characters.
fn is_russian_tag(tag: &str) -> bool {
    let tag = tag.trim();
    let Some(prefix) = tag.get(..2) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case("ru") {
        return false;
    }
    tag[2..]
        .chars()
        .next()
        .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '_'))
}

/// Parses an `Accept-Language` header into tags ordered by preference.
/// Equal weights keep header order; `q=0` tags are dropped.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let q = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (q > 0.0).then(|| (tag.to_string(), q))
        })
        .collect();

    // sort_by is stable, so header order survives for equal q
    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Locale for a bare `/` request. A country signal, when present, decides
/// alone; otherwise the browser's language preference does.
pub fn resolve_request_locale(country: Option<&str>, accept_language: Option<&str>) -> Locale {
    let country = country.map(str::trim).filter(|c| !c.is_empty());
    if country.is_some() {
        return Locale::from_country(country);
    }
    match accept_language {
        Some(header) => Locale::from_language_tags(parse_accept_language(header)),
        None => Locale::En,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ru_country_maps_to_ru() {
        assert_eq!(Locale::from_country(Some("RU")), Locale::Ru);
        assert_eq!(Locale::from_country(Some("ru")), Locale::Ru);
    }

    #[test]
    fn test_other_countries_map_to_en() {
        for code in ["US", "DE", "UA", "BY", "KZ", "GB", "XX", "", "RUS"] {
            assert_eq!(
                Locale::from_country(Some(code)),
                Locale::En,
                "country {code:?} should resolve to en"
            );
        }
    }

    #[test]
    fn test_absent_country_maps_to_en() {
        assert_eq!(Locale::from_country(None), Locale::En);
    }

    #[test]
    fn test_language_tags_ru_prefix() {
        assert_eq!(Locale::from_language_tags(["ru-RU", "en"]), Locale::Ru);
        assert_eq!(Locale::from_language_tags(["RU"]), Locale::Ru);
    }

    #[test]
    fn test_language_tags_only_first_counts() {
        assert_eq!(Locale::from_language_tags(["en-US", "ru"]), Locale::En);
    }

    #[test]
    fn test_language_tags_word_boundary() {
        assert_eq!(Locale::from_language_tags(["rue"]), Locale::En);
        assert_eq!(Locale::from_language_tags(["ru_RU"]), Locale::En);
        assert_eq!(Locale::from_language_tags(["ruä"]), Locale::Ru);
        assert_eq!(Locale::from_language_tags(["ru-Cyrl"]), Locale::Ru);
        assert_eq!(Locale::from_language_tags(Vec::<String>::new()), Locale::En);
    }

    #[test]
    fn test_parse_accept_language_orders_by_q() {
        let tags = parse_accept_language("en;q=0.5, ru-RU, de;q=0.8, fr;q=0");
        assert_eq!(tags, vec!["ru-RU", "de", "en"]);
    }

    #[test]
    fn test_parse_accept_language_keeps_order_for_equal_q() {
        let tags = parse_accept_language("en-GB,en;q=0.9,ru;q=0.9");
        assert_eq!(tags, vec!["en-GB", "en", "ru"]);
    }

    #[test]
    fn test_resolve_country_wins_over_language() {
        assert_eq!(resolve_request_locale(Some("US"), Some("ru-RU")), Locale::En);
        assert_eq!(resolve_request_locale(Some("RU"), Some("en-US")), Locale::Ru);
    }

    #[test]
    fn test_resolve_falls_back_to_language() {
        assert_eq!(resolve_request_locale(None, Some("ru,en;q=0.8")), Locale::Ru);
        assert_eq!(resolve_request_locale(Some("  "), Some("ru")), Locale::Ru);
        assert_eq!(resolve_request_locale(None, None), Locale::En);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Locale::from_path("/ru/"), Some(Locale::Ru));
        assert_eq!(Locale::from_path("/en"), Some(Locale::En));
        assert_eq!(Locale::from_path("/ru/anything/deeper"), Some(Locale::Ru));
        assert_eq!(Locale::from_path("/de/"), None);
        assert_eq!(Locale::from_path("/english/"), None);
        assert_eq!(Locale::from_path("/"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Ru).unwrap(), "\"ru\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
