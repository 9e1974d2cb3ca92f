//! Hyperlink extraction from fetched search pages.

use scraper::{Html, Selector};
use url::Url;

use crate::types::{ContentType, SearchResult};

/// Extract every hyperlink from `html`, resolving each href against the
/// page's own URL. Anchors without an href or without visible text are
/// skipped, as are hrefs that do not resolve to a valid URL.
pub(crate) fn extract_links(html: &str, base_url: &Url) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    let Ok(anchor_sel) = Selector::parse("a") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for element in document.select(&anchor_sel) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let title = element.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }
        let Ok(resolved) = base_url.join(href) else {
            continue;
        };
        let link = resolved.to_string();
        if link.is_empty() {
            continue;
        }
        links.push(SearchResult::new(ContentType::Web, title, link));
    }
    links
}
