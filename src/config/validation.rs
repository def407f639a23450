use crate::config::types::{
    Config, OutputConfig, RawDataEntry, ScraperConfig, SourceEntry, UserAgentConfig,
};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_sources(&config.sources)?;
    validate_raw_data(&config.raw_data)?;
    Ok(())
}

/// Validates crawl behaviour settings
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.max_retries < 1 || config.max_retries > 20 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be between 1 and 20, got {}",
            config.max_retries
        )));
    }

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be >= 1s, got {}s",
            config.request_timeout
        )));
    }

    if config.max_pages == Some(0) {
        return Err(ConfigError::Validation(
            "max-pages must be >= 1 when set".to_string(),
        ));
    }

    if config.catalog_segment.is_empty() || config.catalog_segment.contains('/') {
        return Err(ConfigError::Validation(format!(
            "catalog-segment must be a single non-empty path segment, got '{}'",
            config.catalog_segment
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if let Some(contact) = &config.contact_url {
        Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.raw_data_dir.is_empty() {
        return Err(ConfigError::Validation(
            "raw-data-dir cannot be empty".to_string(),
        ));
    }

    if config.processed_data_dir.is_empty() {
        return Err(ConfigError::Validation(
            "processed-data-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the catalog table
fn validate_sources(sources: &[SourceEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for source in sources {
        validate_id(&source.id, "sources", &mut seen)?;

        let url = Url::parse(&source.url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid source URL '{}': {}", source.url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Source URL '{}' must use http or https",
                source.url
            )));
        }
    }

    Ok(())
}

/// Validates the raw data file table
fn validate_raw_data(entries: &[RawDataEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in entries {
        validate_id(&entry.id, "raw-data", &mut seen)?;

        if entry.path.is_empty() {
            return Err(ConfigError::Validation(format!(
                "raw-data entry '{}' has an empty path",
                entry.id
            )));
        }
    }

    Ok(())
}

fn validate_id<'a>(
    id: &'a str,
    table: &str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), ConfigError> {
    if id.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{} entries need a non-empty id",
            table
        )));
    }

    if !seen.insert(id) {
        return Err(ConfigError::Validation(format!(
            "Duplicate id '{}' in {}",
            id, table
        )));
    }

    Ok(())
}
