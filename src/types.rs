//! Core types for search results and content categories.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The content categories that can be searched.
///
/// Every per-category decision in the pipeline (provider parameter
/// mapping, extractor selection) is an exhaustive `match` on this enum,
/// so adding a category is a compile-time-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// General web pages.
    Web,
    /// Image results.
    Image,
    /// Video results (native hits plus embedded platform references).
    Video,
    /// News articles.
    News,
    /// Audio tracks.
    Audio,
}

impl ContentType {
    /// Returns the lowercase name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Image => "image",
            Self::Video => "video",
            Self::News => "news",
            Self::Audio => "audio",
        }
    }

    /// Returns all available category variants.
    pub fn all() -> &'static [ContentType] {
        &[
            Self::Web,
            Self::Image,
            Self::Video,
            Self::News,
            Self::Audio,
        ]
    }

    /// Returns the categories searched when the caller does not name any.
    ///
    /// Audio is opt-in: it is only queried when requested explicitly.
    pub fn defaults() -> &'static [ContentType] {
        &[Self::Web, Self::Image, Self::Video, Self::News]
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single search result, the unit of output for every pipeline stage.
///
/// `link` is always a canonical absolute URL and acts as the identity
/// key: two results with equal `link` are the same entity regardless of
/// their other fields. Results are read-only once past deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Which category this result belongs to.
    pub content_type: ContentType,
    /// Result title.
    pub title: String,
    /// Canonical absolute URL. Identity key for deduplication.
    pub link: String,
    /// Text snippet summarising the result, when the provider supplies one.
    pub snippet: Option<String>,
    /// Thumbnail URL, when available without a platform API call.
    pub thumbnail: Option<String>,
    /// Provider engine or media platform name.
    pub source: Option<String>,
    /// Playback duration, for video results.
    pub duration: Option<String>,
    /// View count, for video results.
    pub views: Option<String>,
    /// Publication date, for news results.
    pub date: Option<String>,
    /// Pre-rendered player markup for known platforms.
    pub embed_code: Option<String>,
    /// Link of the page a synthesized result was extracted from.
    pub source_page: Option<String>,
    /// Byte size reported by a probed image's content-length header.
    pub size_bytes: Option<u64>,
}

impl SearchResult {
    /// Create a result with the required fields set and every optional
    /// field empty. Callers fill in extras with struct update syntax.
    pub fn new(
        content_type: ContentType,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            content_type,
            title: title.into(),
            link: link.into(),
            snippet: None,
            thumbnail: None,
            source: None,
            duration: None,
            views: None,
            date: None,
            embed_code: None,
            source_page: None,
            size_bytes: None,
        }
    }
}

/// The aggregated output shape: one result list per requested category.
///
/// A requested category that produced nothing still has its key present,
/// mapped to an empty list.
pub type ResultMap = HashMap<ContentType, Vec<SearchResult>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_names() {
        assert_eq!(ContentType::Web.name(), "web");
        assert_eq!(ContentType::Image.name(), "image");
        assert_eq!(ContentType::Video.name(), "video");
        assert_eq!(ContentType::News.name(), "news");
        assert_eq!(ContentType::Audio.name(), "audio");
    }

    #[test]
    fn content_type_display() {
        assert_eq!(ContentType::Video.to_string(), "video");
        assert_eq!(ContentType::Audio.to_string(), "audio");
    }

    #[test]
    fn content_type_all_covers_every_variant() {
        let all = ContentType::all();
        assert_eq!(all.len(), 5);
        assert!(all.contains(&ContentType::Web));
        assert!(all.contains(&ContentType::Audio));
    }

    #[test]
    fn default_set_excludes_audio() {
        let defaults = ContentType::defaults();
        assert_eq!(defaults.len(), 4);
        assert!(!defaults.contains(&ContentType::Audio));
    }

    #[test]
    fn content_type_serde_lowercase() {
        let json = serde_json::to_string(&ContentType::News).expect("serialize");
        assert_eq!(json, "\"news\"");
        let decoded: ContentType = serde_json::from_str("\"video\"").expect("deserialize");
        assert_eq!(decoded, ContentType::Video);
    }

    #[test]
    fn content_type_equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ContentType::Web);
        set.insert(ContentType::Web);
        assert_eq!(set.len(), 1);
        set.insert(ContentType::Image);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn search_result_new_leaves_optionals_empty() {
        let result = SearchResult::new(ContentType::Web, "Example", "https://example.com/");
        assert_eq!(result.title, "Example");
        assert_eq!(result.link, "https://example.com/");
        assert!(result.snippet.is_none());
        assert!(result.thumbnail.is_none());
        assert!(result.source_page.is_none());
        assert!(result.size_bytes.is_none());
    }

    #[test]
    fn search_result_struct_update_fills_extras() {
        let result = SearchResult {
            snippet: Some("a clip".into()),
            source: Some("youtube".into()),
            ..SearchResult::new(ContentType::Video, "Clip", "https://example.com/v")
        };
        assert_eq!(result.snippet.as_deref(), Some("a clip"));
        assert_eq!(result.source.as_deref(), Some("youtube"));
        assert_eq!(result.content_type, ContentType::Video);
    }

    #[test]
    fn search_result_serde_round_trip() {
        let result = SearchResult {
            duration: Some("3:12".into()),
            views: Some("1024".into()),
            ..SearchResult::new(ContentType::Video, "Clip", "https://example.com/v")
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: SearchResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.link, "https://example.com/v");
        assert_eq!(decoded.duration.as_deref(), Some("3:12"));
        assert_eq!(decoded.content_type, ContentType::Video);
    }
}
