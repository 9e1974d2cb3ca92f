//! In-memory TTL cache for aggregated search results.
//!
//! Caches the final per-category result map keyed by the (lowercased
//! query, content-type set) pair. Uses [`moka`] for async-friendly
//! caching with configurable TTL and automatic eviction. Lives for the
//! process; nothing is persisted.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use std::time::Duration;

use moka::future::Cache;

use crate::types::{ContentType, ResultMap};

/// Maximum number of cached result maps.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Global process-wide result cache.
///
/// Lazily initialised on first access. TTL is set when first created
/// and cannot be changed after initialisation.
static CACHE: OnceLock<Cache<CacheKey, ResultMap>> = OnceLock::new();

/// Composite cache key: normalised query + content-type set hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    /// Lowercased, trimmed query string.
    query: String,
    /// Hash of the sorted content-type set, so different category
    /// selections produce different cache entries.
    type_hash: u64,
}

impl CacheKey {
    /// Build a deterministic cache key from a query and category list.
    ///
    /// The query is lowercased and trimmed. The category list is sorted
    /// and hashed so that `[Web, Video]` and `[Video, Web]` produce the
    /// same key.
    pub(crate) fn new(query: &str, content_types: &[ContentType]) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            type_hash: hash_types(content_types),
        }
    }
}

fn get_or_init_cache(ttl_seconds: u64) -> &'static Cache<CacheKey, ResultMap> {
    CACHE.get_or_init(|| {
        Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build()
    })
}

/// Look up cached results for the given key.
pub(crate) async fn get(key: &CacheKey, ttl_seconds: u64) -> Option<ResultMap> {
    get_or_init_cache(ttl_seconds).get(key).await
}

/// Insert aggregated results into the cache.
pub(crate) async fn insert(key: CacheKey, results: ResultMap, ttl_seconds: u64) {
    get_or_init_cache(ttl_seconds).insert(key, results).await;
}

/// Compute a deterministic hash of a content-type set, order-insensitive.
fn hash_types(content_types: &[ContentType]) -> u64 {
    let mut sorted: Vec<&ContentType> = content_types.iter().collect();
    sorted.sort_by_key(|ct| ct.name());
    sorted.dedup_by_key(|ct| ct.name());
    let mut hasher = DefaultHasher::new();
    for content_type in sorted {
        content_type.name().hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchResult;
    use std::collections::HashMap;

    #[test]
    fn cache_key_deterministic_for_same_inputs() {
        let key1 = CacheKey::new("rust videos", &[ContentType::Web, ContentType::Video]);
        let key2 = CacheKey::new("rust videos", &[ContentType::Web, ContentType::Video]);
        assert_eq!(key1, key2);
    }

    #[test]
    fn cache_key_ignores_type_order() {
        let key1 = CacheKey::new("cats", &[ContentType::Web, ContentType::Video]);
        let key2 = CacheKey::new("cats", &[ContentType::Video, ContentType::Web]);
        assert_eq!(key1, key2);
    }

    #[test]
    fn cache_key_normalises_query() {
        let key1 = CacheKey::new("  Rust  ", &[ContentType::Web]);
        let key2 = CacheKey::new("rust", &[ContentType::Web]);
        assert_eq!(key1, key2);
    }

    #[test]
    fn cache_key_differs_when_query_differs() {
        let key1 = CacheKey::new("rust", &[ContentType::Web]);
        let key2 = CacheKey::new("python", &[ContentType::Web]);
        assert_ne!(key1, key2);
    }

    #[test]
    fn cache_key_differs_when_type_set_differs() {
        let key1 = CacheKey::new("rust", &[ContentType::Web]);
        let key2 = CacheKey::new("rust", &[ContentType::News]);
        assert_ne!(key1, key2);
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let key = CacheKey::new("cache round trip", &[ContentType::Web]);
        let mut map: ResultMap = HashMap::new();
        map.insert(
            ContentType::Web,
            vec![SearchResult::new(
                ContentType::Web,
                "Example",
                "https://example.com/",
            )],
        );
        insert(key.clone(), map, 60).await;
        let hit = get(&key, 60).await.expect("cache hit");
        assert_eq!(hit[&ContentType::Web].len(), 1);
        assert_eq!(hit[&ContentType::Web][0].link, "https://example.com/");
    }

    #[tokio::test]
    async fn miss_returns_none() {
        let key = CacheKey::new("never inserted query", &[ContentType::News]);
        assert!(get(&key, 60).await.is_none());
    }
}
