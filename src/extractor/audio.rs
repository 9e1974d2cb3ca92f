//! Embedded audio recognition across hosting platforms.
//!
//! Mirrors the video table for soundcloud, spotify, and bandcamp. No
//! audio platform exposes URL-derived artwork, so synthesized results
//! carry no thumbnail.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use crate::types::{ContentType, SearchResult};

/// Audio platforms with recognisable track URL shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioPlatform {
    Soundcloud,
    Spotify,
    Bandcamp,
}

impl AudioPlatform {
    /// Lowercase platform key, used as the result's `source`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Soundcloud => "soundcloud",
            Self::Spotify => "spotify",
            Self::Bandcamp => "bandcamp",
        }
    }

    /// Capitalised platform label for synthesized titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Soundcloud => "Soundcloud",
            Self::Spotify => "Spotify",
            Self::Bandcamp => "Bandcamp",
        }
    }

    /// Returns all recognised audio platforms.
    pub fn all() -> &'static [AudioPlatform] {
        &[Self::Soundcloud, Self::Spotify, Self::Bandcamp]
    }

    /// Recognition pattern with the track identifier as capture group 1.
    ///
    /// Bandcamp tracks live on per-artist subdomains, so its identifier
    /// includes the host: `{artist}.bandcamp.com/track/{slug}`.
    fn pattern(&self) -> &'static str {
        match self {
            Self::Soundcloud => {
                r"(?:https?://)?(?:www\.)?soundcloud\.com/([a-zA-Z0-9_-]+/[a-zA-Z0-9_-]+)"
            }
            Self::Spotify => r"(?:https?://)?(?:open\.)?spotify\.com/track/([a-zA-Z0-9]+)",
            Self::Bandcamp => {
                r"(?:https?://)?([a-zA-Z0-9-]+\.bandcamp\.com/track/[a-zA-Z0-9_-]+)"
            }
        }
    }

    /// Canonical track URL for a captured identifier.
    pub fn playback_url(&self, id: &str) -> Option<String> {
        match self {
            Self::Soundcloud => Some(format!("https://soundcloud.com/{id}")),
            Self::Spotify => Some(format!("https://open.spotify.com/track/{id}")),
            Self::Bandcamp => Some(format!("https://{id}")),
        }
    }
}

/// Compiled recognition patterns, one per platform.
fn audio_patterns() -> &'static [(AudioPlatform, Regex)] {
    static PATTERNS: OnceLock<Vec<(AudioPlatform, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        AudioPlatform::all()
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

/// Synthesize audio results for platform references inside `result`'s
/// snippet.
pub(crate) fn extract_audio(result: &SearchResult) -> Vec<SearchResult> {
    let Some(snippet) = result.snippet.as_deref() else {
        return Vec::new();
    };

    let mut extracted = Vec::new();
    for (platform, pattern) in audio_patterns() {
        for captures in pattern.captures_iter(snippet) {
            let Some(id) = captures.get(1) else { continue };
            let Some(link) = platform.playback_url(id.as_str()) else {
                continue;
            };
            extracted.push(SearchResult {
                snippet: result.snippet.clone(),
                source: Some(platform.name().to_string()),
                source_page: Some(result.link.clone()),
                ..SearchResult::new(
                    ContentType::Audio,
                    format!("{} - {} Audio", result.title, platform.label()),
                    link,
                )
            });
        }
    }
    extracted
}
