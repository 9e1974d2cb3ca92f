//! Query aggregator: concurrent per-category fan-out, extraction, dedup.
//!
//! A single query fans out to one provider adapter call per requested
//! category. Branches run concurrently and fail independently: a failed
//! category contributes an empty list, never an error, and never affects
//! sibling categories. Each category's batch is then enriched with
//! embedded-media extraction (web, image, video, and news batches only)
//! and deduplicated on its own; deduplication is per category, not
//! global.

pub mod dedup;

use std::collections::HashMap;

use crate::cache::{self, CacheKey};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::extractor;
use crate::http;
use crate::providers::CategoryAdapter;
use crate::rate::RequestPacer;
use crate::types::{ContentType, ResultMap};

/// Aggregate a search across the requested categories.
///
/// # Pipeline
///
/// 1. Validate config and consult the result cache
/// 2. Build the shared HTTP client and request pacer
/// 3. Fan out one adapter call per category with [`futures::future::join_all`]
/// 4. Append embedded-media extraction to web/image/video/news batches
/// 5. Deduplicate each category's batch independently
///
/// Every requested category has a key in the returned map; a category
/// whose providers all failed maps to an empty list.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration and
/// [`SearchError::Http`] if the HTTP client cannot be constructed.
/// Provider and extraction failures never surface here.
pub async fn aggregate(
    query: &str,
    content_types: &[ContentType],
    config: &SearchConfig,
) -> Result<ResultMap, SearchError> {
    config.validate()?;
    tracing::trace!(query, categories = content_types.len(), "aggregate search");

    let cache_key = CacheKey::new(query, content_types);
    if config.cache_ttl_seconds > 0 {
        if let Some(hit) = cache::get(&cache_key, config.cache_ttl_seconds).await {
            tracing::debug!("returning cached results");
            return Ok(hit);
        }
    }

    let client = http::build_client(config)?;
    let pacer = RequestPacer::new(config);
    let client_ref = &client;
    let pacer_ref = &pacer;

    let futures: Vec<_> = content_types
        .iter()
        .map(|content_type| {
            let ct = *content_type;
            async move {
                let adapter = CategoryAdapter::new(client_ref, pacer_ref, config);
                let results = adapter.search(query, ct).await;
                (ct, results)
            }
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    let mut merged: ResultMap = HashMap::new();
    for (content_type, mut batch) in outcomes {
        let native = batch.len();
        if matches!(
            content_type,
            ContentType::Web | ContentType::Image | ContentType::Video | ContentType::News
        ) {
            let extracted =
                extractor::extract_embedded(&client, &pacer, &batch, content_type).await;
            batch.extend(extracted);
        }
        let deduped = dedup::dedupe(batch);
        tracing::debug!(
            %content_type,
            native,
            total = deduped.len(),
            "category batch finished"
        );
        merged.insert(content_type, deduped);
    }

    if config.cache_ttl_seconds > 0 {
        cache::insert(cache_key, merged.clone(), config.cache_ttl_seconds).await;
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_config_rejected_before_any_request() {
        let config = SearchConfig {
            max_results: 0,
            ..Default::default()
        };
        let result = aggregate("test", &[ContentType::Web], &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_results"));
    }

    #[tokio::test]
    async fn empty_category_list_yields_empty_map() {
        let config = SearchConfig {
            cache_ttl_seconds: 0,
            ..Default::default()
        };
        let map = aggregate("test", &[], &config).await.expect("aggregate");
        assert!(map.is_empty());
    }
}
