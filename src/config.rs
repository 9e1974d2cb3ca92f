//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the provider instance list, result caps,
//! timeouts, request pacing, retry bounds, proxies, and caching. The
//! defaults are tuned for reliable, polite scraping of public
//! federated-search instances.

use crate::error::SearchError;

/// Configuration for search and crawl operations.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Federated provider instances, tried in priority order. The first
    /// instance returning non-empty results for a category wins.
    pub instances: Vec<String>,
    /// Maximum raw results per category per adapter call.
    pub max_results: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Whether to request safe-search filtering from providers.
    pub safe_search: bool,
    /// How long to cache aggregated results in seconds. 0 disables caching.
    pub cache_ttl_seconds: u64,
    /// Minimum delay in milliseconds between consecutive requests to the
    /// federated provider instances.
    pub provider_delay_ms: u64,
    /// Minimum delay in milliseconds between generic fetches (crawler
    /// pages, image probes).
    pub general_delay_ms: u64,
    /// Fixed number of fetch attempts per provider instance before the
    /// adapter moves on. Not exponential; a bounded loop.
    pub max_retries: u32,
    /// Fixed delay in seconds between crawler endpoints.
    pub crawl_delay_seconds: u64,
    /// Proxy URLs applied to every outbound request, selected round-robin.
    /// Empty means direct connections.
    pub proxies: Vec<String>,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            instances: vec![
                "https://searx.be".into(),
                "https://search.ononoki.org".into(),
                "https://searx.tiekoetter.com".into(),
                "https://search.bus-hit.me".into(),
                "https://search.leptons.xyz".into(),
            ],
            max_results: 10,
            timeout_seconds: 8,
            safe_search: true,
            cache_ttl_seconds: 600,
            provider_delay_ms: 1000,
            general_delay_ms: 500,
            max_retries: 3,
            crawl_delay_seconds: 3,
            proxies: Vec::new(),
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `instances` must not be empty
    /// - `max_retries` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.instances.is_empty() {
            return Err(SearchError::Config(
                "at least one provider instance must be configured".into(),
            ));
        }
        if self.max_retries == 0 {
            return Err(SearchError::Config(
                "max_retries must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
