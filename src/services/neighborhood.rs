/// Neighborhood categorization by keyword matching against a static dictionary
/// The category name doubles as a fallback-table intent

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborhoodCategory {
    Nightlife,
    Food,
    Arts,
    Shopping,
    Historic,
    Nature,
    Waterfront,
    Family,
    Business,
    Residential,
    General,
}

impl NeighborhoodCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nightlife => "nightlife",
            Self::Food => "food",
            Self::Arts => "arts",
            Self::Shopping => "shopping",
            Self::Historic => "historic",
            Self::Nature => "nature",
            Self::Waterfront => "waterfront",
            Self::Family => "family",
            Self::Business => "business",
            Self::Residential => "residential",
            Self::General => "general",
        }
    }
}

/// Dictionary order breaks ties
static DICTIONARY: &[(NeighborhoodCategory, &[&str])] = &[
    (
        NeighborhoodCategory::Nightlife,
        &["nightlife", "bar", "bars", "club", "clubs", "pub", "pubs", "cocktail", "cocktails", "lounge", "party", "speakeasy"],
    ),
    (
        NeighborhoodCategory::Food,
        &["food", "restaurant", "restaurants", "cafe", "cafes", "market", "markets", "street food", "bakery", "bakeries", "dining", "eatery", "hawker", "brunch"],
    ),
    (
        NeighborhoodCategory::Arts,
        &["art", "arts", "gallery", "galleries", "museum", "museums", "theater", "theatre", "studio", "studios", "murals", "bohemian", "creative"],
    ),
    (
        NeighborhoodCategory::Shopping,
        &["shopping", "shops", "boutique", "boutiques", "mall", "malls", "fashion", "designer", "bazaar", "outlet"],
    ),
    (
        NeighborhoodCategory::Historic,
        &["historic", "historical", "old town", "medieval", "cathedral", "castle", "temple", "temples", "heritage", "ancient", "colonial", "palace", "quarter"],
    ),
    (
        NeighborhoodCategory::Nature,
        &["park", "parks", "garden", "gardens", "hiking", "forest", "green", "hill", "hills", "nature", "trail", "trails"],
    ),
    (
        NeighborhoodCategory::Waterfront,
        &["beach", "beaches", "waterfront", "harbor", "harbour", "marina", "pier", "seaside", "riverside", "canal", "canals", "port", "bay"],
    ),
    (
        NeighborhoodCategory::Family,
        &["family", "families", "kids", "children", "playground", "zoo", "aquarium", "quiet"],
    ),
    (
        NeighborhoodCategory::Business,
        &["business", "financial", "office", "offices", "downtown", "skyscraper", "skyscrapers", "corporate", "cbd"],
    ),
    (
        NeighborhoodCategory::Residential,
        &["residential", "suburb", "suburban", "leafy", "homes", "apartments", "locals"],
    ),
];

/// Lowercase, non-alphanumerics become spaces, whitespace collapsed
fn normalize_text(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            normalized.extend(ch.to_lowercase());
        } else {
            normalized.push(' ');
        }
    }
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whole-word (or whole-phrase) occurrences of `keyword` in normalized text
fn count_phrase(haystack: &str, keyword: &str) -> usize {
    if haystack.is_empty() {
        return 0;
    }
    let padded = format!(" {} ", haystack);
    let needle = format!(" {} ", keyword);
    padded.match_indices(&needle).count()
}

/// Name hits score 2, description hits score 1; no hits → General
pub fn categorize_neighborhood(name: &str, description: Option<&str>) -> NeighborhoodCategory {
    let name = normalize_text(name);
    let description = normalize_text(description.unwrap_or(""));

    let mut best = (NeighborhoodCategory::General, 0usize);
    for (category, keywords) in DICTIONARY {
        let score: usize = keywords
            .iter()
            .map(|k| count_phrase(&name, k) * 2 + count_phrase(&description, k))
            .sum();
        if score > best.1 {
            best = (*category, score);
        }
    }
    best.0
}
