//! Error types for the omnisearch crate.
//!
//! Network and parse failures inside the pipeline degrade to empty
//! result sets and are logged rather than raised, so the variants here
//! surface only at the API boundary: invalid configuration and HTTP
//! client construction.

/// Errors that can occur during search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request failed or the client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider response or fetched document could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for omnisearch results.
pub type Result<T> = std::result::Result<T, SearchError>;
