//! Provider adapter: one content category, a prioritized instance list.
//!
//! [`CategoryAdapter::search`] tries each configured instance in order
//! and stops at the first one returning non-empty results. Failures are
//! logged and advance to the next instance; the adapter never raises to
//! its caller. If every instance fails, the category contributes zero
//! results and the overall aggregation continues.

pub(crate) mod params;

use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::rate::{DelayClass, RequestPacer};
use crate::types::{ContentType, SearchResult};

/// Queries one content category across the configured instance list.
pub struct CategoryAdapter<'a> {
    client: &'a reqwest::Client,
    pacer: &'a RequestPacer,
    config: &'a SearchConfig,
}

impl<'a> CategoryAdapter<'a> {
    /// Create an adapter borrowing the invocation's shared client and pacer.
    pub fn new(
        client: &'a reqwest::Client,
        pacer: &'a RequestPacer,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            client,
            pacer,
            config,
        }
    }

    /// Search one category. Infallible: total failure yields an empty list.
    ///
    /// First instance returning non-empty results wins; no merging across
    /// instances. Results are capped at `config.max_results` to bound
    /// downstream extraction cost.
    pub async fn search(&self, query: &str, content_type: ContentType) -> Vec<SearchResult> {
        tracing::trace!(query, %content_type, "category search");

        let mut failures = FailureLog::default();
        for instance in &self.config.instances {
            match self
                .try_instance(instance, query, content_type, &mut failures)
                .await
            {
                Ok(results) if !results.is_empty() => {
                    let mut results = results;
                    results.truncate(self.config.max_results);
                    tracing::debug!(
                        %content_type,
                        %instance,
                        count = results.len(),
                        "instance returned results"
                    );
                    return results;
                }
                Ok(_) => {
                    tracing::debug!(%content_type, %instance, "instance returned no results");
                }
                Err(err) => {
                    tracing::warn!(%content_type, %instance, error = %err, "instance query failed");
                }
            }
        }

        failures.emit(content_type);
        Vec::new()
    }

    /// Try a single instance with the configured bounded retry loop.
    async fn try_instance(
        &self,
        instance: &str,
        query: &str,
        content_type: ContentType,
        failures: &mut FailureLog,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut last_err = SearchError::Http(format!("no attempt made against {instance}"));
        for attempt in 1..=self.pacer.max_retries() {
            self.pacer.pace(DelayClass::Provider).await;
            match self.fetch_once(instance, query, content_type).await {
                Ok(results) => return Ok(results),
                Err(err) => {
                    tracing::trace!(instance, attempt, error = %err, "fetch attempt failed");
                    failures.record(instance);
                    last_err = err;
                }
            }
        }
        Err(last_err)
    }

    /// One fetch against one instance. 404 means "no results".
    async fn fetch_once(
        &self,
        instance: &str,
        query: &str,
        content_type: ContentType,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let params = params::query_params(query, content_type, self.config.safe_search);
        let endpoint = format!("{}/search", instance.trim_end_matches('/'));

        let response = self
            .client
            .get(&endpoint)
            .query(&params)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("request to {instance} failed: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let response = response
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("{instance} HTTP error: {e}")))?;

        let body: params::InstanceResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("{instance} response decode failed: {e}")))?;

        let results: Vec<SearchResult> = body
            .results
            .into_iter()
            .filter_map(|raw| params::map_result(raw, content_type))
            .collect();

        tracing::trace!(instance, count = results.len(), "instance response mapped");
        Ok(results)
    }
}

/// Transient per-call failure counts, for diagnostics only.
#[derive(Debug, Default)]
struct FailureLog {
    counts: HashMap<String, u32>,
}

impl FailureLog {
    fn record(&mut self, instance: &str) {
        *self.counts.entry(instance.to_string()).or_default() += 1;
    }

    /// Emit the counts once a category has exhausted its instance list.
    fn emit(&self, content_type: ContentType) {
        if self.counts.is_empty() {
            tracing::debug!(%content_type, "no instance had results");
        } else {
            tracing::debug!(
                %content_type,
                failures = ?self.counts,
                "all instances exhausted"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_log_counts_attempts() {
        let mut log = FailureLog::default();
        log.record("https://a.example");
        log.record("https://a.example");
        log.record("https://b.example");
        assert_eq!(log.counts["https://a.example"], 2);
        assert_eq!(log.counts["https://b.example"], 1);
    }

    #[test]
    fn adapter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CategoryAdapter<'static>>();
    }
}
