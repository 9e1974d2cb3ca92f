//! Sequential crawler: open-ended accumulation over a fixed endpoint list.
//!
//! One [`CrawlSession`] owns one background task that walks the ordered
//! endpoint list serially, extracting link/title pairs from each page
//! and appending unseen links to the session's result list. Progress is
//! observed by polling: each [`CrawlSession::poll`] returns the slice of
//! results appended since the previous poll, tracked by a monotonic
//! watermark index. Dropping the session cancels the task.
//!
//! Failures on one endpoint log and advance to the next; there are no
//! retries across endpoints. A fixed delay separates endpoint fetches.

pub mod endpoints;
mod parse;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::rate::{DelayClass, RequestPacer};
use crate::types::SearchResult;

/// A progress snapshot returned by [`CrawlSession::poll`].
#[derive(Debug, Clone)]
pub struct CrawlProgress {
    /// Results appended since the previous poll, in discovery order.
    pub new_results: Vec<SearchResult>,
    /// Cumulative result count. Non-decreasing across polls.
    pub total: usize,
    /// Set once every endpoint has been tried. Terminal.
    pub completed: bool,
    /// The endpoint currently being fetched, if the crawl is mid-list.
    pub current_endpoint: Option<String>,
    /// Index of the endpoint currently being processed.
    pub position: usize,
    /// Total number of endpoints in this session's list.
    pub total_endpoints: usize,
}

/// Mutable crawl state shared between the producer task and pollers.
///
/// Exactly one task mutates this; pollers take the lock briefly for a
/// snapshot. The lock is never held across an await.
#[derive(Debug, Default)]
struct CrawlState {
    results: Vec<SearchResult>,
    seen_links: HashSet<String>,
    current_endpoint: Option<String>,
    position: usize,
    completed: bool,
    watermark: usize,
}

/// One crawl invocation: owned state, a background task, and the token
/// that stops it.
///
/// Created with [`CrawlSession::spawn`]; the task starts immediately
/// and can only be started once per session, so concurrent re-invocation
/// on the same session cannot happen. Must be created inside a tokio
/// runtime.
pub struct CrawlSession {
    topic: String,
    state: Arc<Mutex<CrawlState>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
    total_endpoints: usize,
}

impl CrawlSession {
    /// Spawn a crawl over the default endpoint list.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration and
    /// [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn spawn(topic: &str, config: &SearchConfig) -> Result<Self, SearchError> {
        let endpoints: Vec<String> = endpoints::SEARCH_ENDPOINTS
            .iter()
            .map(|endpoint| (*endpoint).to_string())
            .collect();
        Self::spawn_with_endpoints(topic, config, endpoints)
    }

    /// Spawn a crawl over a caller-supplied ordered endpoint list.
    ///
    /// Each endpoint is a URL prefix; the topic is appended verbatim.
    pub fn spawn_with_endpoints(
        topic: &str,
        config: &SearchConfig,
        endpoints: Vec<String>,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(config)?;
        let pacer = RequestPacer::new(config);
        let state = Arc::new(Mutex::new(CrawlState::default()));
        let cancel = CancellationToken::new();
        let total_endpoints = endpoints.len();

        let task = tokio::spawn(run_crawl(
            topic.to_string(),
            endpoints,
            client,
            pacer,
            Duration::from_secs(config.crawl_delay_seconds),
            Arc::clone(&state),
            cancel.clone(),
        ));

        Ok(Self {
            topic: topic.to_string(),
            state,
            cancel,
            task: Some(task),
            total_endpoints,
        })
    }

    /// The query text this session was started with.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Number of endpoints this session will try.
    pub fn total_endpoints(&self) -> usize {
        self.total_endpoints
    }

    /// Whether the crawl has tried every endpoint.
    pub fn is_completed(&self) -> bool {
        lock_state(&self.state).completed
    }

    /// Return everything discovered since the previous poll.
    ///
    /// Consecutive polls never overlap; their slices concatenate to the
    /// full result list in discovery order.
    pub fn poll(&self) -> CrawlProgress {
        let mut state = lock_state(&self.state);
        let new_results = state.results[state.watermark..].to_vec();
        state.watermark = state.results.len();
        CrawlProgress {
            new_results,
            total: state.results.len(),
            completed: state.completed,
            current_endpoint: state.current_endpoint.clone(),
            position: state.position,
            total_endpoints: self.total_endpoints,
        }
    }

    /// Stop the background task at its next suspension point.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the background task to finish. Useful after [`cancel`]
    /// or when driving a short endpoint list to completion in tests.
    ///
    /// [`cancel`]: CrawlSession::cancel
    pub async fn join(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for CrawlSession {
    fn drop(&mut self) {
        // An abandoned session must not leak its task or client.
        self.cancel.cancel();
    }
}

fn lock_state(state: &Mutex<CrawlState>) -> MutexGuard<'_, CrawlState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// The background crawl loop. Strictly sequential over `endpoint_list`.
async fn run_crawl(
    topic: String,
    endpoint_list: Vec<String>,
    client: reqwest::Client,
    pacer: RequestPacer,
    delay: Duration,
    state: Arc<Mutex<CrawlState>>,
    cancel: CancellationToken,
) {
    tracing::info!(endpoints = endpoint_list.len(), "crawl started");
    tracing::trace!(%topic, "crawl topic");

    for (index, endpoint) in endpoint_list.iter().enumerate() {
        if cancel.is_cancelled() {
            tracing::debug!("crawl cancelled");
            return;
        }

        {
            let mut state = lock_state(&state);
            state.position = index;
            state.current_endpoint = Some(endpoint.clone());
        }

        let search_url = format!("{endpoint}{topic}");
        let Ok(page_url) = Url::parse(&search_url) else {
            tracing::warn!(%endpoint, "endpoint produced unparseable URL, skipping");
            continue;
        };

        pacer.pace(DelayClass::General).await;

        let fetched = tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!("crawl cancelled mid-fetch");
                return;
            }
            fetched = fetch_page(&client, page_url.clone()) => fetched,
        };

        match fetched {
            Ok(Some(body)) => {
                let links = parse::extract_links(&body, &page_url);
                let mut state = lock_state(&state);
                let before = state.results.len();
                for hit in links {
                    if hit.link.is_empty() {
                        continue;
                    }
                    if state.seen_links.insert(hit.link.clone()) {
                        state.results.push(hit);
                    }
                }
                tracing::debug!(
                    %endpoint,
                    new = state.results.len() - before,
                    total = state.results.len(),
                    "endpoint crawled"
                );
            }
            Ok(None) => {
                tracing::debug!(%endpoint, "endpoint had no page, skipping");
            }
            Err(err) => {
                tracing::warn!(%endpoint, error = %err, "endpoint fetch failed, advancing");
            }
        }

        if !delay.is_zero() {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::debug!("crawl cancelled during delay");
                    return;
                }
                () = tokio::time::sleep(delay) => {}
            }
        }
    }

    let mut state = lock_state(&state);
    state.completed = true;
    state.position = endpoint_list.len();
    state.current_endpoint = None;
    tracing::info!(total = state.results.len(), "crawl completed");
}

/// Fetch one endpoint page. 404 is a clean skip (`Ok(None)`); other HTTP
/// errors and transport failures are `Err`.
async fn fetch_page(client: &reqwest::Client, url: Url) -> Result<Option<String>, SearchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("request failed: {e}")))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let response = response
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("HTTP error: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("body read failed: {e}")))?;

    Ok(Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SearchConfig {
        SearchConfig {
            crawl_delay_seconds: 0,
            general_delay_ms: 0,
            provider_delay_ms: 0,
            cache_ttl_seconds: 0,
            timeout_seconds: 2,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_endpoint_list_completes_immediately() {
        let mut session =
            CrawlSession::spawn_with_endpoints("cats", &test_config(), vec![]).expect("spawn");
        session.join().await;
        let progress = session.poll();
        assert!(progress.completed);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.total_endpoints, 0);
        assert!(progress.current_endpoint.is_none());
    }

    #[tokio::test]
    async fn unreachable_endpoints_advance_to_completion() {
        let endpoints = vec![
            "http://127.0.0.1:1/search?q=".to_string(),
            "http://127.0.0.1:1/other?q=".to_string(),
        ];
        let mut session =
            CrawlSession::spawn_with_endpoints("cats", &test_config(), endpoints).expect("spawn");
        session.join().await;
        let progress = session.poll();
        assert!(progress.completed);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.position, 2);
    }

    #[tokio::test]
    async fn invalid_config_rejected_at_spawn() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..test_config()
        };
        assert!(CrawlSession::spawn_with_endpoints("cats", &config, vec![]).is_err());
    }

    #[tokio::test]
    async fn topic_and_counts_exposed() {
        let session =
            CrawlSession::spawn_with_endpoints("space cats", &test_config(), vec![]).expect("spawn");
        assert_eq!(session.topic(), "space cats");
        assert_eq!(session.total_endpoints(), 0);
    }
}
