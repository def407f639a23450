//! Configuration module for Shelf-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and exposes the identifier lookups used by the crawl and processing triggers.
//!
//! # Example
//!
//! ```no_run
//! use shelf_harvest::config::{load_config, SourceProvider};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! let source = config.source("102").unwrap();
//! println!("Crawling {}", source.url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, RawDataEntry, ScraperConfig, SourceEntry, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

use crate::ConfigError;

/// Resolves trigger identifiers to the records they name
///
/// Triggers receive an implementation of this trait instead of reading a
/// lookup file themselves.
pub trait SourceProvider {
    /// Looks up the catalog registered under `id`
    fn source(&self, id: &str) -> Result<&SourceEntry, ConfigError>;

    /// Looks up the raw data file registered under `id`
    fn raw_data(&self, id: &str) -> Result<&RawDataEntry, ConfigError>;
}

impl SourceProvider for Config {
    fn source(&self, id: &str) -> Result<&SourceEntry, ConfigError> {
        self.sources
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| ConfigError::UnknownSource(id.to_string()))
    }

    fn raw_data(&self, id: &str) -> Result<&RawDataEntry, ConfigError> {
        self.raw_data
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ConfigError::UnknownRawData(id.to_string()))
    }
}
