//! Shelf-Harvest: a paginated catalog harvester
//!
//! This crate crawls a paginated book catalog, extracts one raw record per
//! listing entry (resolving each item's category from its detail page), stores
//! the raw rows as CSV and later cleans them into a typed, validated dataset.

pub mod config;
pub mod crawler;
pub mod output;
pub mod processing;
pub mod records;
pub mod state;
pub mod storage;
pub mod trigger;
pub mod url;

use thiserror::Error;

/// Main error type for Shelf-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Extraction error: {message}")]
    Extraction { message: String },

    #[error("Invalid crawl transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Raw data file is missing column '{0}'")]
    MissingColumn(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarvestError {
    /// Builds an extraction error from any displayable message
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the network layer
    ///
    /// Only these failures are worth repeating a detail fetch for.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Status { .. } | Self::Timeout { .. } | Self::Reqwest(_)
        )
    }
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

    #[error("No scraper found with ID {0}")]
    UnknownSource(String),

    #[error("No raw data file found with ID {0}")]
    UnknownRawData(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Cannot resolve '{href}' against {base}")]
    Unresolvable { href: String, base: String },
}

/// Result type alias for Shelf-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, SourceProvider};
pub use records::{Availability, CleanedBookRecord, RawBookRecord};
pub use trigger::{run_processing, run_scraper, TriggerResult};
