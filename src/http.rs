//! Shared HTTP client with User-Agent rotation and proxy support.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers,
//! cookie support, and rotating User-Agent strings. One client is built
//! per pipeline invocation and reused across every request of that
//! invocation for connection pooling.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] configured for scraping.
///
/// The client has:
/// - Cookie store enabled (for provider consent pages)
/// - Timeout from config
/// - Random User-Agent from the built-in rotation list (or custom if configured)
/// - Brotli and gzip decompression
/// - Round-robin proxy selection when `config.proxies` is non-empty
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    let mut builder = reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10));

    if let Some(proxy) = rotating_proxy(&config.proxies) {
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// Build a proxy that cycles through the configured list, one proxy per
/// request. Entries that do not parse as URLs are skipped with a warning;
/// returns `None` when no usable proxy remains.
fn rotating_proxy(proxies: &[String]) -> Option<reqwest::Proxy> {
    let parsed: Vec<Url> = proxies
        .iter()
        .filter_map(|raw| match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(proxy = %raw, error = %err, "skipping unparseable proxy");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        return None;
    }

    let counter = AtomicUsize::new(0);
    Some(reqwest::Proxy::custom(move |_url| {
        let index = counter.fetch_add(1, Ordering::Relaxed) % parsed.len();
        Some(parsed[index].clone())
    }))
}
