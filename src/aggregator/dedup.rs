//! Order-preserving result deduplication.
//!
//! Identity is the exact `link` string. The first occurrence wins and
//! later duplicates are dropped silently, so relative discovery order
//! survives. Idempotent under re-application.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Remove duplicate results, keeping the first occurrence of each link.
pub fn dedupe(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());
    let mut unique = Vec::with_capacity(results.len());
    for result in results {
        if seen.insert(result.link.clone()) {
            unique.push(result);
        }
    }
    unique
}
