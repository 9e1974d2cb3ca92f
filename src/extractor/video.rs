//! Embedded video recognition across hosting platforms.
//!
//! A fixed table maps each platform to a recognition pattern with one
//! identifier-capturing group. Matched identifiers are rebuilt into
//! canonical playback URLs; thumbnails are derived without a platform
//! API call where the platform's URL scheme allows it (youtube and
//! dailymotion only).

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use crate::types::{ContentType, SearchResult};

/// Video platforms with recognisable embed/watch URL shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoPlatform {
    Youtube,
    Vimeo,
    Dailymotion,
    Twitch,
    Facebook,
}

impl VideoPlatform {
    /// Lowercase platform key, used as the result's `source`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Dailymotion => "dailymotion",
            Self::Twitch => "twitch",
            Self::Facebook => "facebook",
        }
    }

    /// Capitalised platform label for synthesized titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Youtube => "Youtube",
            Self::Vimeo => "Vimeo",
            Self::Dailymotion => "Dailymotion",
            Self::Twitch => "Twitch",
            Self::Facebook => "Facebook",
        }
    }

    /// Returns all recognised video platforms.
    pub fn all() -> &'static [VideoPlatform] {
        &[
            Self::Youtube,
            Self::Vimeo,
            Self::Dailymotion,
            Self::Twitch,
            Self::Facebook,
        ]
    }

    /// Recognition pattern with the video identifier as capture group 1.
    fn pattern(&self) -> &'static str {
        match self {
            Self::Youtube => {
                r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})"
            }
            Self::Vimeo => r"(?:https?://)?(?:www\.)?vimeo\.com/([0-9]+)",
            Self::Dailymotion => r"(?:https?://)?(?:www\.)?dailymotion\.com/video/([a-zA-Z0-9]+)",
            Self::Twitch => r"(?:https?://)?(?:www\.)?twitch\.tv/videos/([0-9]+)",
            Self::Facebook => r"(?:https?://)?(?:www\.)?facebook\.com/watch/\?v=([0-9]+)",
        }
    }

    /// Canonical playback URL for a captured identifier.
    ///
    /// Returns `None` for a platform without a canonical playback form;
    /// such candidates are silently dropped.
    pub fn playback_url(&self, id: &str) -> Option<String> {
        match self {
            Self::Youtube => Some(format!("https://www.youtube.com/watch?v={id}")),
            Self::Vimeo => Some(format!("https://vimeo.com/{id}")),
            Self::Dailymotion => Some(format!("https://www.dailymotion.com/video/{id}")),
            Self::Twitch => Some(format!("https://www.twitch.tv/videos/{id}")),
            Self::Facebook => Some(format!("https://www.facebook.com/watch/?v={id}")),
        }
    }

    /// Thumbnail URL derivable from the identifier alone.
    ///
    /// Only youtube and dailymotion expose URL-derived thumbnails; the
    /// other platforms require an API call and yield `None`.
    pub fn thumbnail_url(&self, id: &str) -> Option<String> {
        match self {
            Self::Youtube => Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")),
            Self::Dailymotion => Some(format!("https://www.dailymotion.com/thumbnail/video/{id}")),
            Self::Vimeo | Self::Twitch | Self::Facebook => None,
        }
    }
}

/// Compiled recognition patterns, one per platform.
fn video_patterns() -> &'static [(VideoPlatform, Regex)] {
    static PATTERNS: OnceLock<Vec<(VideoPlatform, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        VideoPlatform::all()
            .iter()
            .map(|platform| {
                let regex = RegexBuilder::new(platform.pattern())
                    .case_insensitive(true)
                    .build()
                    .expect("platform pattern compiles");
                (*platform, regex)
            })
            .collect()
    })
}

/// Synthesize video results for platform references inside `result`'s
/// snippet. Returns an empty list when the snippet is absent or matches
/// nothing.
pub(crate) fn extract_videos(result: &SearchResult) -> Vec<SearchResult> {
    let Some(snippet) = result.snippet.as_deref() else {
        return Vec::new();
    };

    let mut extracted = Vec::new();
    for (platform, pattern) in video_patterns() {
        for captures in pattern.captures_iter(snippet) {
            let Some(id) = captures.get(1) else { continue };
            let Some(link) = platform.playback_url(id.as_str()) else {
                continue;
            };
            extracted.push(SearchResult {
                snippet: result.snippet.clone(),
                thumbnail: platform.thumbnail_url(id.as_str()),
                source: Some(platform.name().to_string()),
                source_page: Some(result.link.clone()),
                ..SearchResult::new(
                    ContentType::Video,
                    format!("{} - {} Video", result.title, platform.label()),
                    link,
                )
            });
        }
    }
    extracted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_snippet(snippet: &str) -> SearchResult {
        SearchResult {
            snippet: Some(snippet.to_string()),
            ..SearchResult::new(ContentType::Video, "Page", "https://origin.example/page")
        }
    }

    #[test]
    fn youtube_watch_url_extracted() {
        let result =
            result_with_snippet("see https://www.youtube.com/watch?v=abc12345678 for the clip");
        let extracted = extract_videos(&result);
        assert_eq!(extracted.len(), 1);
        assert_eq!(
            extracted[0].link,
            "https://www.youtube.com/watch?v=abc12345678"
        );
        assert_eq!(extracted[0].source.as_deref(), Some("youtube"));
        assert_eq!(
            extracted[0].thumbnail.as_deref(),
            Some("https://img.youtube.com/vi/abc12345678/hqdefault.jpg")
        );
        assert_eq!(
            extracted[0].source_page.as_deref(),
            Some("https://origin.example/page")
        );
        assert_eq!(extracted[0].title, "Page - Youtube Video");
    }

    #[test]
    fn youtube_short_url_extracted() {
        let result = result_with_snippet("https://youtu.be/abc12345678");
        let extracted = extract_videos(&result);
        assert_eq!(extracted.len(), 1);
        assert_eq!(
            extracted[0].link,
            "https://www.youtube.com/watch?v=abc12345678"
        );
    }

    #[test]
    fn vimeo_url_extracted_without_thumbnail() {
        let result = result_with_snippet("watch it on https://vimeo.com/76979871 today");
        let extracted = extract_videos(&result);
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].link, "https://vimeo.com/76979871");
        assert!(extracted[0].thumbnail.is_none());
        assert_eq!(extracted[0].source.as_deref(), Some("vimeo"));
    }

    #[test]
    fn dailymotion_gets_derived_thumbnail() {
        let result = result_with_snippet("https://www.dailymotion.com/video/x8abcd1");
        let extracted = extract_videos(&result);
        assert_eq!(extracted.len(), 1);
        assert_eq!(
            extracted[0].thumbnail.as_deref(),
            Some("https://www.dailymotion.com/thumbnail/video/x8abcd1")
        );
    }

    #[test]
    fn twitch_and_facebook_extracted() {
        let result = result_with_snippet(
            "https://www.twitch.tv/videos/123456 and https://www.facebook.com/watch/?v=987654",
        );
        let extracted = extract_videos(&result);
        assert_eq!(extracted.len(), 2);
        let links: Vec<&str> = extracted.iter().map(|r| r.link.as_str()).collect();
        assert!(links.contains(&"https://www.twitch.tv/videos/123456"));
        assert!(links.contains(&"https://www.facebook.com/watch/?v=987654"));
    }

    #[test]
    fn case_insensitive_match() {
        let result = result_with_snippet("HTTPS://VIMEO.COM/123456");
        let extracted = extract_videos(&result);
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].link, "https://vimeo.com/123456");
    }

    #[test]
    fn multiple_references_yield_multiple_results() {
        let result =
            result_with_snippet("first https://vimeo.com/111 then second https://vimeo.com/222");
        let extracted = extract_videos(&result);
        assert_eq!(extracted.len(), 2);
    }

    #[test]
    fn no_snippet_yields_nothing() {
        let result = SearchResult::new(ContentType::Video, "Page", "https://origin.example/");
        assert!(extract_videos(&result).is_empty());
    }

    #[test]
    fn plain_text_yields_nothing() {
        let result = result_with_snippet("nothing embedded here, just words");
        assert!(extract_videos(&result).is_empty());
    }

    #[test]
    fn short_youtube_id_not_matched() {
        // IDs are exactly 11 characters; a 6-char tail must not match.
        let result = result_with_snippet("https://www.youtube.com/watch?v=abc123");
        assert!(extract_videos(&result).is_empty());
    }
}
