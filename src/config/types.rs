use serde::Deserialize;

/// Main configuration structure for Shelf-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    #[serde(default, rename = "raw-data")]
    pub raw_data: Vec<RawDataEntry>,
}

/// Crawl behaviour configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Maximum number of detail page fetch attempts per item
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Timeout for every HTTP request (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Base delay between detail attempts (milliseconds), multiplied by the attempt number
    #[serde(rename = "retry-backoff", default = "default_retry_backoff")]
    pub retry_backoff: u64,

    /// Maximum number of listing pages to fetch; unbounded when absent
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u32>,

    /// Path segment that holds item detail pages
    #[serde(rename = "catalog-segment", default = "default_catalog_segment")]
    pub catalog_segment: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            request_timeout: default_request_timeout(),
            retry_backoff: default_retry_backoff(),
            max_pages: None,
            catalog_segment: default_catalog_segment(),
        }
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_request_timeout() -> u64 {
    10
}

fn default_retry_backoff() -> u64 {
    500
}

fn default_catalog_segment() -> String {
    "catalogue".to_string()
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the raw CSV file
    #[serde(rename = "raw-data-dir")]
    pub raw_data_dir: String,

    /// Directory receiving the cleaned dataset
    #[serde(rename = "processed-data-dir")]
    pub processed_data_dir: String,
}

/// A named catalog to crawl
#[derive(Debug, Clone, Deserialize)]
pub struct SourceEntry {
    pub id: String,

    /// Base URL of the catalog (first listing page)
    pub url: String,
}

/// A named raw data file to clean
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataEntry {
    pub id: String,
    pub path: String,
}
