//! Driftnet: a streaming feed search scraper
//!
//! This crate extracts posts matching a search query from a social feed that
//! exposes no public paginated API, by speaking the site's internal
//! browser-driven AJAX contract: bootstrap a session, then walk result pages
//! with an opaque `max_position` cursor, streaming extracted posts to the
//! consumer as each page arrives.

pub mod config;
pub mod cursor;
pub mod engine;
pub mod output;
pub mod post;
pub mod stream;

use thiserror::Error;

/// Main error type for driftnet operations
#[derive(Debug, Error)]
pub enum DriftnetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Bootstrap page has no session container with a max-position attribute")]
    MissingSession,

    #[error("Cursor error: {0}")]
    Cursor(#[from] CursorError),

    #[error("Malformed timeline envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// Cursor-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("Cursor {input:?} has {found} segments, expected at least 4")]
    TooFewSegments { input: String, found: usize },
}

/// Result type alias for driftnet operations
pub type Result<T> = std::result::Result<T, DriftnetError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use cursor::MaxPosition;
pub use engine::{Query, Scraper};
pub use post::Post;
pub use stream::PostStream;
