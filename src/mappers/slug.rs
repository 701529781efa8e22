/// Place-name slugs
/// Lowercase, every run of non-letters/digits (Unicode-aware) becomes one hyphen, no leading/trailing hyphens
/// Deterministic: the same input always yields the same slug

use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{Nd}]+").unwrap());

pub fn slugify(value: &str) -> String {
    let lower = value.to_lowercase();
    NON_ALNUM
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Whitespace-collapsed "{place} {intent}" sent to providers
pub fn effective_query(place: &str, intent: Option<&str>) -> String {
    let mut parts: Vec<&str> = place.split_whitespace().collect();
    if let Some(intent) = intent {
        parts.extend(intent.split_whitespace());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_ignores_case_and_punctuation() {
        assert_eq!(slugify("New York"), "new-york");
        assert_eq!(slugify("new-york"), "new-york");
        assert_eq!(slugify("NEW   YORK!!"), "new-york");
        assert_eq!(slugify("  --Rio de Janeiro, Brazil-- "), "rio-de-janeiro-brazil");
    }

    #[test]
    fn slug_keeps_non_ascii_letters() {
        assert_eq!(slugify("Zürich"), "zürich");
        assert_eq!(slugify("ZÜRICH!"), "zürich");
        assert_eq!(slugify("São Paulo"), "são-paulo");
        assert_eq!(slugify("são-paulo"), "são-paulo");
        assert_eq!(slugify("Kraków"), "kraków");
        assert_eq!(slugify("東京"), "東京");
        assert_ne!(slugify("東京"), slugify("北京"));
    }

    #[test]
    fn slug_of_empty_or_symbols_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ---"), "");
    }

    #[test]
    fn effective_query_collapses_whitespace() {
        assert_eq!(effective_query("  Paris ", Some(" street  food ")), "Paris street food");
        assert_eq!(effective_query("Paris", None), "Paris");
        assert_eq!(effective_query("Paris", Some("   ")), "Paris");
        assert_eq!(effective_query("   ", None), "");
    }
}
