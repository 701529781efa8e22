/// Static fallback table
/// slug / category → known-good image URLs, used when every live provider fails
/// or the place is denylisted. Read-only after load.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::mappers::slug::slugify;
use crate::types::image::ImageRecord;

/// Bundled at build time
const BUNDLED: &str = include_str!("../../data/fallback_images.json");

/// Last resort when even the table's default entry is missing
pub const DEFAULT_HERO: &str =
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=1600&q=80";

pub const DEFAULT_VENUE: [&str; 3] = [
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&q=80",
    "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=800&q=80",
    "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800&q=80",
];

const PLACEHOLDER_PHOTOGRAPHER: &str = "Unsplash";
const PLACEHOLDER_PROFILE: &str = "https://unsplash.com";

pub fn default_hero() -> ImageRecord {
    ImageRecord::fallback(DEFAULT_HERO, PLACEHOLDER_PHOTOGRAPHER, PLACEHOLDER_PROFILE)
}

/// `count` records cycling through DEFAULT_VENUE
pub fn default_venue(count: usize) -> Vec<ImageRecord> {
    (0..count)
        .map(|i| {
            ImageRecord::fallback(
                DEFAULT_VENUE[i % DEFAULT_VENUE.len()],
                PLACEHOLDER_PHOTOGRAPHER,
                PLACEHOLDER_PROFILE,
            )
        })
        .collect()
}

/// A table entry: bare URL or URL with attribution
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FallbackImage {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        photographer: Option<String>,
        #[serde(rename = "profileUrl", default)]
        profile_url: Option<String>,
    },
}

impl FallbackImage {
    pub fn to_record(&self) -> ImageRecord {
        match self {
            FallbackImage::Url(url) => {
                ImageRecord::fallback(url, PLACEHOLDER_PHOTOGRAPHER, PLACEHOLDER_PROFILE)
            }
            FallbackImage::Detailed {
                url,
                photographer,
                profile_url,
            } => ImageRecord::fallback(
                url,
                photographer.as_deref().unwrap_or(PLACEHOLDER_PHOTOGRAPHER),
                profile_url.as_deref().unwrap_or(PLACEHOLDER_PROFILE),
            ),
        }
    }

    fn url(&self) -> &str {
        match self {
            FallbackImage::Url(url) => url,
            FallbackImage::Detailed { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroSection {
    #[serde(default)]
    pub default: Option<FallbackImage>,
    #[serde(default)]
    pub places: HashMap<String, FallbackImage>,
    #[serde(default)]
    pub categories: HashMap<String, FallbackImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueSection {
    #[serde(default)]
    pub default: Vec<FallbackImage>,
    #[serde(default)]
    pub places: HashMap<String, Vec<FallbackImage>>,
    #[serde(default)]
    pub categories: HashMap<String, Vec<FallbackImage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackTable {
    #[serde(default)]
    pub hero: HeroSection,
    #[serde(default)]
    pub venue: VenueSection,
}

impl FallbackTable {
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED).unwrap_or_else(|e| {
            warn!("[FALLBACK] bundled table is invalid: {}", e);
            Self::default()
        })
    }

    /// Parse a table; keys are re-slugified so "New York" and "new-york" are the same entry
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: FallbackTable = serde_json::from_str(raw)?;
        Ok(parsed.normalized())
    }

    /// File override, falling back to the bundled data on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::bundled();
        };
        match std::fs::read_to_string(path) {
            Ok(raw) => match Self::from_json(&raw) {
                Ok(table) => {
                    info!("[FALLBACK] loaded {}", path.display());
                    table
                }
                Err(e) => {
                    warn!("[FALLBACK] {} is invalid, using bundled table: {}", path.display(), e);
                    Self::bundled()
                }
            },
            Err(e) => {
                warn!("[FALLBACK] cannot read {}, using bundled table: {}", path.display(), e);
                Self::bundled()
            }
        }
    }

    fn normalized(self) -> Self {
        fn rekey<V>(map: HashMap<String, V>) -> HashMap<String, V> {
            map.into_iter().map(|(k, v)| (slugify(&k), v)).collect()
        }

        Self {
            hero: HeroSection {
                default: self.hero.default.filter(|d| !d.url().is_empty()),
                places: rekey(self.hero.places),
                categories: rekey(self.hero.categories),
            },
            venue: VenueSection {
                default: self.venue.default,
                places: rekey(self.venue.places),
                categories: rekey(self.venue.categories),
            },
        }
    }

    /// Slug entry, then intent entry, then the default entry
    pub fn lookup_hero(&self, slug: &str, intent: Option<&str>) -> Option<ImageRecord> {
        self.hero
            .places
            .get(slug)
            .or_else(|| intent.and_then(|i| self.hero.categories.get(i)))
            .or(self.hero.default.as_ref())
            .map(FallbackImage::to_record)
    }

    /// Same precedence as `lookup_hero`; short entries are cycled up to `count`
    pub fn lookup_venue_set(&self, slug: &str, intent: Option<&str>, count: usize) -> Vec<ImageRecord> {
        let entry = self
            .venue
            .places
            .get(slug)
            .filter(|e| !e.is_empty())
            .or_else(|| {
                intent
                    .and_then(|i| self.venue.categories.get(i))
                    .filter(|e| !e.is_empty())
            })
            .or(Some(&self.venue.default).filter(|e| !e.is_empty()));

        match entry {
            Some(entry) => (0..count).map(|i| entry[i % entry.len()].to_record()).collect(),
            None => Vec::new(),
        }
    }

    pub fn place_count(&self) -> usize {
        self.hero.places.len() + self.venue.places.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "hero": {
            "default": "https://img/default.jpg",
            "places": { "Tokyo": "https://img/tokyo.jpg" },
            "categories": { "food": { "url": "https://img/food.jpg", "photographer": "Ana" } }
        },
        "venue": {
            "default": ["https://img/v1.jpg", "https://img/v2.jpg", "https://img/v3.jpg"],
            "places": { "bangkok": ["https://img/b1.jpg", "https://img/b2.jpg", "https://img/b3.jpg"] },
            "categories": { "food": ["https://img/f1.jpg"] }
        }
    }"#;

    #[test]
    fn bundled_table_has_defaults() {
        let table = FallbackTable::bundled();
        assert!(table.hero.default.is_some());
        assert!(!table.venue.default.is_empty());
        assert!(table.place_count() > 0);
    }

    #[test]
    fn hero_prefers_slug_then_intent_then_default() {
        let table = FallbackTable::from_json(TABLE).unwrap();

        let hit = table.lookup_hero("tokyo", Some("food")).unwrap();
        assert_eq!(hit.url, "https://img/tokyo.jpg");

        let hit = table.lookup_hero("osaka", Some("food")).unwrap();
        assert_eq!(hit.url, "https://img/food.jpg");
        assert_eq!(hit.photographer, "Ana");
        assert_eq!(hit.profile_url, PLACEHOLDER_PROFILE);

        let hit = table.lookup_hero("osaka", None).unwrap();
        assert_eq!(hit.url, "https://img/default.jpg");
    }

    #[test]
    fn hero_without_default_is_none() {
        let table = FallbackTable::from_json(r#"{"hero": {"places": {}}}"#).unwrap();
        assert!(table.lookup_hero("anywhere", None).is_none());
    }

    #[test]
    fn venue_set_cycles_short_entries() {
        let table = FallbackTable::from_json(TABLE).unwrap();
        let urls: Vec<String> = table
            .lookup_venue_set("bangkok", Some("unknownintent"), 5)
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://img/b1.jpg",
                "https://img/b2.jpg",
                "https://img/b3.jpg",
                "https://img/b1.jpg",
                "https://img/b2.jpg",
            ]
        );
    }

    #[test]
    fn venue_set_uses_category_then_default() {
        let table = FallbackTable::from_json(TABLE).unwrap();
        let food = table.lookup_venue_set("lima", Some("food"), 2);
        assert_eq!(food.len(), 2);
        assert!(food.iter().all(|r| r.url == "https://img/f1.jpg"));

        let generic = table.lookup_venue_set("lima", None, 1);
        assert_eq!(generic[0].url, "https://img/v1.jpg");
    }

    #[test]
    fn non_ascii_place_keys_stay_distinct() {
        let table = FallbackTable::from_json(
            r#"{"hero": {"places": {
                "Zürich": "https://img/zurich.jpg",
                "東京": "https://img/tokyo-jp.jpg",
                "北京": "https://img/beijing.jpg"
            }}}"#,
        )
        .unwrap();

        assert_eq!(table.place_count(), 3);
        assert_eq!(table.lookup_hero("zürich", None).unwrap().url, "https://img/zurich.jpg");
        assert_eq!(table.lookup_hero("東京", None).unwrap().url, "https://img/tokyo-jp.jpg");
        assert_eq!(table.lookup_hero("北京", None).unwrap().url, "https://img/beijing.jpg");
    }

    #[test]
    fn empty_table_yields_nothing() {
        let table = FallbackTable::default();
        assert!(table.lookup_venue_set("x", None, 3).is_empty());
    }

    #[test]
    fn default_constants_cover_any_count() {
        assert_eq!(default_venue(4).len(), 4);
        assert_eq!(default_venue(4)[3].url, DEFAULT_VENUE[0]);
        assert_eq!(default_hero().url, DEFAULT_HERO);
    }
}
