//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for listing and detail pages
//! - Classification of the outcome into success, HTTP error or network error
//!
//! Nothing here retries; retry policy belongs to the caller.

use crate::config::UserAgentConfig;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,
    pub status_code: u16,
    pub body: String,
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success(FetchedPage),

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure)
    NetworkError {
        /// The underlying client error
        error: reqwest::Error,
    },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts any failure into a transport error for `url`
    pub fn into_page(self, url: &str) -> Result<FetchedPage, HarvestError> {
        match self {
            Self::Success(page) => Ok(page),
            Self::HttpError { status_code } => Err(HarvestError::Status {
                url: url.to_string(),
                status: status_code,
            }),
            Self::NetworkError { error } if error.is_timeout() => Err(HarvestError::Timeout {
                url: url.to_string(),
            }),
            Self::NetworkError { error } => Err(HarvestError::Http {
                url: url.to_string(),
                source: error,
            }),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Whole-request timeout applied to every fetch
///
/// # Example
///
/// ```no_run
/// use shelf_harvest::config::UserAgentConfig;
/// use shelf_harvest::crawler::build_http_client;
/// use std::time::Duration;
///
/// let config = UserAgentConfig {
///     crawler_name: "ShelfHarvest".to_string(),
///     crawler_version: "0.1".to_string(),
///     contact_url: None,
/// };
///
/// let client = build_http_client(&config, Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once and classifies the outcome
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(error) => return FetchResult::NetworkError { error },
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().clone();

    match response.text().await {
        Ok(body) => FetchResult::Success(FetchedPage {
            final_url,
            status_code: status.as_u16(),
            body,
        }),
        Err(error) => FetchResult::NetworkError { error },
    }
}
