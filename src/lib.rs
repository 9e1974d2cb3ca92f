//! # omnisearch
//!
//! Multi-category federated web search for embedding in other programs.
//!
//! This crate aggregates search results (web, image, video, news, audio)
//! by querying public federated-search instances directly. No API keys
//! and no user setup required.
//!
//! ## Design
//!
//! - Queries one category per provider call, trying instances in
//!   priority order with first-success-wins failover
//! - Fans categories out concurrently; a failing category degrades to an
//!   empty list without affecting its siblings
//! - Recognises media embedded in result text (youtube, vimeo,
//!   soundcloud, raw image URLs, ...) and synthesizes results for it
//! - Deduplicates per category by link, preserving discovery order
//! - A separate sequential crawler walks a long list of generic search
//!   endpoints and delivers link/title pairs incrementally via polling
//! - In-memory TTL cache for aggregated results
//! - User-Agent rotation, request pacing, and optional proxy rotation
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners; this is a library, not a server
//! - Search queries are logged only at trace level

pub mod aggregator;
mod cache;
pub mod config;
pub mod crawler;
pub mod error;
pub mod extractor;
pub mod http;
pub mod providers;
pub mod rate;
pub mod types;

pub use config::SearchConfig;
pub use crawler::{CrawlProgress, CrawlSession};
pub use error::{Result, SearchError};
pub use types::{ContentType, ResultMap, SearchResult};

/// Search the default categories (web, image, video, news) concurrently.
///
/// Each category is queried through the configured provider instances,
/// enriched with embedded-media extraction, and deduplicated. Every
/// default category has a key in the returned map; a category whose
/// providers all failed maps to an empty list.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration and
/// [`SearchError::Http`] if the HTTP client cannot be constructed.
/// Provider failures never surface as errors.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> omnisearch::Result<()> {
/// let config = omnisearch::SearchConfig::default();
/// let results = omnisearch::search("rust programming", &config).await?;
/// for result in &results[&omnisearch::ContentType::Web] {
///     println!("{}: {}", result.title, result.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<ResultMap> {
    aggregator::aggregate(query, ContentType::defaults(), config).await
}

/// Search an explicit set of categories concurrently.
///
/// Like [`search`] but with a caller-chosen category list; this is the
/// only way to query the audio category.
///
/// # Errors
///
/// Same as [`search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> omnisearch::Result<()> {
/// use omnisearch::ContentType;
/// let config = omnisearch::SearchConfig::default();
/// let results =
///     omnisearch::search_types("lofi beats", &[ContentType::Audio], &config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_types(
    query: &str,
    content_types: &[ContentType],
    config: &SearchConfig,
) -> Result<ResultMap> {
    aggregator::aggregate(query, content_types, config).await
}

/// Search the default categories with default configuration.
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(query: &str) -> Result<ResultMap> {
    search(query, &SearchConfig::default()).await
}
