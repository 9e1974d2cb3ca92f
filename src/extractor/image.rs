//! Embedded image recognition with optimistic header validation.
//!
//! Raw image-like URLs are recognised by file extension or by known
//! media path segments, then validated with a lightweight HEAD probe.
//! A probe that fails outright does not reject the candidate: pattern
//! match alone is treated as sufficient evidence. Only a definite
//! non-image content-type rejects. Byte size is read from the same
//! probe's content-length header when present; no image decoding occurs.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;
use url::Url;

use crate::rate::{DelayClass, RequestPacer};
use crate::types::{ContentType, SearchResult};

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

const IMAGE_PATH_SEGMENTS: &[&str] = &["/media/", "/images/", "/photos/", "/img/", "/picture/"];

/// Compiled image URL scan patterns: one for extensions, one for media
/// path segments.
fn image_url_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"https?://[^/\s]+/\S+?\.(?:jpg|jpeg|png|gif|bmp|webp)(?:\?\S+)?",
            r"https?://[^/\s]+/\S+?/(?:media|images|photos|img|picture)/\S+?(?:\?\S+)?",
        ]
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("image pattern compiles")
        })
        .collect()
    })
}

/// Structural check applied before any network probe: absolute http(s)
/// URL whose path ends in an image extension or contains a media segment.
pub(crate) fn looks_like_image_url(candidate: &str) -> bool {
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };
    if parsed.host_str().is_none() || !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }
    let path = parsed.path().to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        || IMAGE_PATH_SEGMENTS.iter().any(|seg| path.contains(seg))
}

/// Outcome of the HEAD probe against an image candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeOutcome {
    /// The server reported an image content-type.
    Image { size_bytes: Option<u64> },
    /// The server answered with a non-image content-type.
    NotImage,
    /// The probe itself failed; the candidate is accepted on pattern
    /// evidence alone.
    Unreachable,
}

/// HEAD-probe a candidate image URL.
pub(crate) async fn probe_image_url(
    client: &reqwest::Client,
    pacer: &RequestPacer,
    url: &str,
) -> ProbeOutcome {
    pacer.pace(DelayClass::General).await;
    match client.head(url).send().await {
        Ok(response) => {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            if content_type.starts_with("image/") {
                let size_bytes = response
                    .headers()
                    .get(reqwest::header::CONTENT_LENGTH)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                ProbeOutcome::Image { size_bytes }
            } else {
                ProbeOutcome::NotImage
            }
        }
        Err(err) => {
            tracing::trace!(url, error = %err, "image probe failed, accepting on pattern match");
            ProbeOutcome::Unreachable
        }
    }
}

/// Synthesize image results for raw image URLs inside `result`'s snippet.
///
/// Probe rejections drop the candidate; probe failures accept it. The
/// image URL doubles as its own thumbnail.
pub(crate) async fn extract_images(
    client: &reqwest::Client,
    pacer: &RequestPacer,
    result: &SearchResult,
) -> Vec<SearchResult> {
    let Some(snippet) = result.snippet.as_deref() else {
        return Vec::new();
    };

    let mut extracted = Vec::new();
    for pattern in image_url_patterns() {
        for found in pattern.find_iter(snippet) {
            let image_url = found.as_str();
            if !looks_like_image_url(image_url) {
                continue;
            }
            let size_bytes = match probe_image_url(client, pacer, image_url).await {
                ProbeOutcome::Image { size_bytes } => size_bytes,
                ProbeOutcome::Unreachable => None,
                ProbeOutcome::NotImage => continue,
            };
            extracted.push(SearchResult {
                snippet: result.snippet.clone(),
                thumbnail: Some(image_url.to_string()),
                source_page: Some(result.link.clone()),
                size_bytes,
                ..SearchResult::new(ContentType::Image, result.title.clone(), image_url)
            });
        }
    }
    extracted
}
