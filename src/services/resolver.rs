/// Image resolution policy
/// denylist → cache → two providers in random order → fallback table.
/// Never fails: the worst case is the generic default image.

use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::result_cache::{CacheKey, ResultCache};
use crate::config::ImageryConfig;
use crate::error::ProviderError;
use crate::fallback::table::{default_hero, default_venue, FallbackTable};
use crate::mappers::slug::{effective_query, slugify};
use crate::provider_client::client::ProxySearchClient;
use crate::provider_client::ImageProvider;
use crate::types::image::ImageRecord;

/// Place names that are also common words; providers answer them with unrelated stock imagery
pub const DEFAULT_DENYLIST: &[&str] = &["nice", "reading", "bath", "split", "mobile", "normal", "batman"];

pub const DEFAULT_VENUE_COUNT: usize = 3;
pub const MAX_VENUE_IMAGES: usize = 30;

/// Decides which provider goes first on each resolution
pub trait ProviderOrder: Send + Sync {
    fn primary_first(&self) -> bool;
}

/// Fresh unseeded coin flip per call
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOrder;

impl ProviderOrder for RandomOrder {
    fn primary_first(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedOrder(pub bool);

impl ProviderOrder for FixedOrder {
    fn primary_first(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageKind {
    Hero,
    Venue,
}

pub struct ImageResolver {
    providers: [Arc<dyn ImageProvider>; 2],
    cache: Arc<ResultCache>,
    fallback: Arc<FallbackTable>,
    order: Arc<dyn ProviderOrder>,
    denylist: HashSet<String>,
}

impl ImageResolver {
    pub fn new(
        primary: Arc<dyn ImageProvider>,
        secondary: Arc<dyn ImageProvider>,
        cache: Arc<ResultCache>,
        fallback: Arc<FallbackTable>,
    ) -> Self {
        Self {
            providers: [primary, secondary],
            cache,
            fallback,
            order: Arc::new(RandomOrder),
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Unsplash + Pixabay through the configured proxy, one fresh cache per call
    pub fn from_config(config: &ImageryConfig) -> Result<Self, ProviderError> {
        let unsplash = ProxySearchClient::unsplash(config)?;
        let pixabay = ProxySearchClient::pixabay(config)?;
        let fallback = FallbackTable::load(config.fallback_file.as_deref());

        let mut resolver = Self::new(
            Arc::new(unsplash),
            Arc::new(pixabay),
            Arc::new(ResultCache::new()),
            Arc::new(fallback),
        );
        if let Some(ref names) = config.denylist {
            resolver = resolver.with_denylist(names);
        }
        Ok(resolver)
    }

    pub fn with_order(mut self, order: Arc<dyn ProviderOrder>) -> Self {
        self.order = order;
        self
    }

    pub fn with_denylist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.denylist = names
            .into_iter()
            .map(|n| slugify(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        self
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub async fn resolve_hero_image(&self, place: &str, intent: Option<&str>) -> String {
        self.resolve_hero_image_with_meta(place, intent).await.url
    }

    pub async fn resolve_hero_image_with_meta(&self, place: &str, intent: Option<&str>) -> ImageRecord {
        self.resolve(place, intent, 1, ImageKind::Hero)
            .await
            .into_iter()
            .next()
            .unwrap_or_else(default_hero)
    }

    /// Live results are returned as-is (possibly fewer than `count`);
    /// only the fallback path pads to `count`
    pub async fn resolve_venue_images(
        &self,
        place: &str,
        intent: Option<&str>,
        count: usize,
    ) -> Vec<ImageRecord> {
        let count = count.clamp(1, MAX_VENUE_IMAGES);
        let images = self.resolve(place, intent, count, ImageKind::Venue).await;
        if images.is_empty() {
            return default_venue(count);
        }
        images
    }

    async fn resolve(
        &self,
        place: &str,
        intent: Option<&str>,
        count: usize,
        kind: ImageKind,
    ) -> Vec<ImageRecord> {
        // 1. normalize
        let slug = slugify(place);
        let intent_slug = intent.map(slugify).filter(|i| !i.is_empty());

        // 2. denylist
        if self.is_denylisted(place, &slug) {
            debug!("[RESOLVE] denylisted place {:?}, using fallback", place);
            return self.fallback_for(kind, &slug, intent_slug.as_deref(), count);
        }

        let query = effective_query(place, intent);
        if query.is_empty() {
            return self.fallback_for(kind, &slug, intent_slug.as_deref(), count);
        }

        // 3. cache
        let key = CacheKey::new(&query, count);
        if let Some(hit) = self.cache.get(&key) {
            return hit.unwrap_or_else(|| self.fallback_for(kind, &slug, intent_slug.as_deref(), count));
        }

        // concurrent identical requests: one network lookup per key
        let lock = self.cache.lock_for(&key);
        let _guard = lock.lock().await;

        if let Some(hit) = self.cache.get(&key) {
            return hit.unwrap_or_else(|| self.fallback_for(kind, &slug, intent_slug.as_deref(), count));
        }

        // 4-5. providers in random order, first non-empty answer wins
        let live = self.search_providers(&query, count, kind).await;
        // 7. store the outcome, misses included
        self.cache.set(key, live.clone());

        // 6. fallback table
        live.unwrap_or_else(|| {
            debug!("[RESOLVE] all providers missed {:?}, using fallback", query);
            self.fallback_for(kind, &slug, intent_slug.as_deref(), count)
        })
    }

    /// Strictly sequential; the first non-empty answer wins
    async fn search_providers(&self, query: &str, count: usize, kind: ImageKind) -> Option<Vec<ImageRecord>> {
        let [a, b] = &self.providers;
        let ordered = if self.order.primary_first() { [a, b] } else { [b, a] };

        for provider in ordered {
            match provider.search(query, count).await {
                Ok(records) if !records.is_empty() => {
                    let records: Vec<ImageRecord> = records.into_iter().take(count).collect();
                    debug!(
                        "[RESOLVE] {} answered {:?} with {} image(s)",
                        provider.name(),
                        query,
                        records.len()
                    );
                    if kind == ImageKind::Hero {
                        spawn_download_tracking(Arc::clone(provider), records[0].clone());
                    }
                    return Some(records);
                }
                Ok(_) => {
                    debug!("[RESOLVE] {} has no results for {:?}", provider.name(), query);
                }
                Err(e) => {
                    warn!("[RESOLVE] {} failed for {:?}: {}", provider.name(), query, e);
                }
            }
        }
        None
    }

    fn fallback_for(&self, kind: ImageKind, slug: &str, intent: Option<&str>, count: usize) -> Vec<ImageRecord> {
        match kind {
            ImageKind::Hero => vec![self.fallback.lookup_hero(slug, intent).unwrap_or_else(default_hero)],
            ImageKind::Venue => {
                let set = self.fallback.lookup_venue_set(slug, intent, count);
                if set.is_empty() {
                    default_venue(count)
                } else {
                    set
                }
            }
        }
    }

    fn is_denylisted(&self, place: &str, slug: &str) -> bool {
        self.denylist.contains(slug) || self.denylist.contains(&place.trim().to_lowercase())
    }
}

/// Fire-and-forget; a failed notification never affects the resolution
fn spawn_download_tracking(provider: Arc<dyn ImageProvider>, record: ImageRecord) {
    if record.download_location.is_none() {
        return;
    }
    tokio::spawn(async move {
        if let Err(e) = provider.track_download(&record).await {
            warn!("[RESOLVE] {} download tracking failed: {}", provider.name(), e);
        }
    });
}
