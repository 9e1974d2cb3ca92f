//! Per-category query parameters and response field mapping.
//!
//! Providers speak the searx JSON API. Each category has a fixed table
//! of upstream engines and a category string, and a fixed mapping from
//! upstream response fields to [`SearchResult`] fields. Both tables are
//! exhaustive matches on [`ContentType`].

use serde::Deserialize;
use url::Url;

use crate::types::{ContentType, SearchResult};

/// Upstream query configuration for one category.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CategoryParams {
    /// Comma-separated upstream engine list.
    pub engines: &'static str,
    /// Provider category string.
    pub categories: &'static str,
}

/// The fixed per-category parameter table.
pub(crate) fn category_params(content_type: ContentType) -> CategoryParams {
    match content_type {
        ContentType::Web => CategoryParams {
            engines: "google,bing,brave",
            categories: "general",
        },
        ContentType::Image => CategoryParams {
            engines: "google images,bing images",
            categories: "images",
        },
        ContentType::Video => CategoryParams {
            engines: "youtube",
            categories: "videos",
        },
        ContentType::News => CategoryParams {
            engines: "google news,bing news",
            categories: "news",
        },
        ContentType::Audio => CategoryParams {
            engines: "soundcloud,bandcamp,mixcloud",
            categories: "music",
        },
    }
}

/// Build the query string for one instance request.
pub(crate) fn query_params(
    query: &str,
    content_type: ContentType,
    safe_search: bool,
) -> Vec<(&'static str, String)> {
    let category = category_params(content_type);
    let mut params = vec![
        ("q", query.to_string()),
        ("format", "json".to_string()),
        ("engines", category.engines.to_string()),
        ("language", "en-US".to_string()),
        ("categories", category.categories.to_string()),
    ];
    if safe_search {
        params.push(("safesearch", "1".to_string()));
    }
    params
}

/// Top-level searx JSON response.
#[derive(Debug, Deserialize)]
pub(crate) struct InstanceResponse {
    #[serde(default)]
    pub results: Vec<RawResult>,
}

/// One upstream result, decoded leniently. Providers disagree on which
/// fields they populate and whether numbers arrive as strings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub length: Option<serde_json::Value>,
    #[serde(default)]
    pub views: Option<serde_json::Value>,
    #[serde(default, rename = "publishedDate")]
    pub published_date: Option<String>,
}

/// Map one raw upstream result into a [`SearchResult`] for `content_type`.
///
/// Returns `None` when the raw entry lacks the fields the category
/// requires (no URL, an image without `img_src`) or the URL is not a
/// valid absolute URL. The parsed URL's serialisation becomes the
/// canonical `link`.
pub(crate) fn map_result(raw: RawResult, content_type: ContentType) -> Option<SearchResult> {
    if raw.url.is_empty() {
        return None;
    }
    let link = Url::parse(&raw.url).ok()?.to_string();
    let snippet = raw.content.filter(|s| !s.is_empty());

    let result = match content_type {
        ContentType::Web => SearchResult {
            snippet,
            source: raw.engine,
            ..SearchResult::new(content_type, raw.title, link)
        },
        ContentType::Image => SearchResult {
            thumbnail: Some(raw.img_src.filter(|s| !s.is_empty())?),
            source: raw.engine,
            ..SearchResult::new(content_type, raw.title, link)
        },
        ContentType::Video => SearchResult {
            snippet,
            thumbnail: raw.thumbnail.filter(|s| !s.is_empty()),
            duration: value_to_text(raw.length),
            views: value_to_text(raw.views),
            source: raw.engine.or_else(|| Some("YouTube".to_string())),
            ..SearchResult::new(content_type, raw.title, link)
        },
        ContentType::News => SearchResult {
            snippet,
            source: raw.engine,
            date: raw.published_date.filter(|s| !s.is_empty()),
            ..SearchResult::new(content_type, raw.title, link)
        },
        ContentType::Audio => SearchResult {
            snippet,
            source: raw.engine,
            ..SearchResult::new(content_type, raw.title, link)
        },
    };
    Some(result)
}

/// Render a loosely-typed JSON field as display text.
fn value_to_text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
