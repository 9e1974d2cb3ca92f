//! Request pacing and bounded retries.
//!
//! [`RequestPacer`] enforces a minimum delay between consecutive
//! requests in the same delay class and carries the fixed retry bound
//! shared by the provider adapter and the sequential crawler. Retries
//! are a bounded loop, not exponential backoff.

use crate::config::SearchConfig;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Delay classes with independent spacing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayClass {
    /// Requests to the federated provider instances.
    Provider,
    /// Generic fetches: crawler pages, image header probes.
    General,
}

/// Enforces minimum inter-request spacing per [`DelayClass`].
///
/// Each class tracks the instant its next request slot becomes free.
/// [`RequestPacer::pace`] reserves the next slot under the lock and
/// sleeps outside it, so concurrent branches are serialized per class
/// without ever holding the lock across an await.
#[derive(Debug)]
pub struct RequestPacer {
    min_delay: HashMap<DelayClass, Duration>,
    next_slot: Mutex<HashMap<DelayClass, Instant>>,
    max_retries: u32,
}

impl RequestPacer {
    /// Create a pacer from the configured delay values and retry bound.
    pub fn new(config: &SearchConfig) -> Self {
        let mut min_delay = HashMap::new();
        min_delay.insert(
            DelayClass::Provider,
            Duration::from_millis(config.provider_delay_ms),
        );
        min_delay.insert(
            DelayClass::General,
            Duration::from_millis(config.general_delay_ms),
        );
        Self {
            min_delay,
            next_slot: Mutex::new(HashMap::new()),
            max_retries: config.max_retries,
        }
    }

    /// Fixed number of fetch attempts per target before giving up.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Wait until the next request slot for `class` is free.
    ///
    /// Returns immediately when the class has a zero delay or no request
    /// has been made yet.
    pub async fn pace(&self, class: DelayClass) {
        let min = self
            .min_delay
            .get(&class)
            .copied()
            .unwrap_or(Duration::ZERO);
        if min.is_zero() {
            return;
        }

        let wait = {
            let mut slots = self
                .next_slot
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            let now = Instant::now();
            match slots.get(&class).copied() {
                Some(free_at) => {
                    let wait = free_at.saturating_duration_since(now);
                    slots.insert(class, now + wait + min);
                    wait
                }
                None => {
                    slots.insert(class, now + min);
                    Duration::ZERO
                }
            }
        };

        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    fn pacer(provider_ms: u64, general_ms: u64) -> RequestPacer {
        RequestPacer::new(&SearchConfig {
            provider_delay_ms: provider_ms,
            general_delay_ms: general_ms,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn first_request_is_not_delayed() {
        let pacer = pacer(500, 500);
        let start = Instant::now();
        pacer.pace(DelayClass::Provider).await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn consecutive_requests_are_spaced() {
        let pacer = pacer(80, 0);
        let start = Instant::now();
        pacer.pace(DelayClass::Provider).await;
        pacer.pace(DelayClass::Provider).await;
        assert!(
            start.elapsed() >= Duration::from_millis(80),
            "second request ran after {:?}",
            start.elapsed()
        );
    }

    #[tokio::test]
    async fn classes_are_independent() {
        let pacer = pacer(200, 0);
        pacer.pace(DelayClass::Provider).await;
        let start = Instant::now();
        pacer.pace(DelayClass::General).await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn zero_delay_class_never_waits() {
        let pacer = pacer(0, 0);
        let start = Instant::now();
        for _ in 0..5 {
            pacer.pace(DelayClass::General).await;
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn max_retries_comes_from_config() {
        let config = SearchConfig {
            max_retries: 7,
            ..Default::default()
        };
        assert_eq!(RequestPacer::new(&config).max_retries(), 7);
    }
}
