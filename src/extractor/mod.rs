//! Embedded media extraction: synthesize results for media referenced
//! inside result text but not surfaced as a first-class result.
//!
//! Dispatch is per category: video and audio batches are scanned with
//! platform pattern tables, image batches with raw-URL heuristics plus
//! a header probe. Web and news batches pass through unchanged. A
//! failure on one input never aborts the batch; extracted results are
//! appended after native results with no re-ranking.

pub mod audio;
pub mod image;
pub mod video;

pub use audio::AudioPlatform;
pub use video::VideoPlatform;

use crate::rate::RequestPacer;
use crate::types::{ContentType, SearchResult};

/// Synthesize additional results for media references inside `results`.
///
/// Returns only the synthesized entries; the caller appends them to the
/// native batch. Every synthesized result carries `source_page` pointing
/// back at the result it was extracted from.
pub async fn extract_embedded(
    client: &reqwest::Client,
    pacer: &RequestPacer,
    results: &[SearchResult],
    content_type: ContentType,
) -> Vec<SearchResult> {
    let mut extracted = Vec::new();
    for result in results {
        match content_type {
            ContentType::Video => extracted.extend(video::extract_videos(result)),
            ContentType::Audio => extracted.extend(audio::extract_audio(result)),
            ContentType::Image => {
                extracted.extend(image::extract_images(client, pacer, result).await);
            }
            ContentType::Web | ContentType::News => {}
        }
    }
    if !extracted.is_empty() {
        tracing::debug!(%content_type, count = extracted.len(), "embedded media extracted");
    }
    extracted
}
