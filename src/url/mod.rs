//! URL handling module for Shelf-Harvest
//!
//! This module resolves the relative links found on listing pages: detail page
//! hrefs (which need the catalog path segment) and pagination hrefs.

mod resolve;

pub use resolve::{resolve_detail_url, resolve_next_page};

use crate::UrlError;
use url::Url;

/// Parses a configured base URL, accepting only http and https
pub fn parse_base_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    Ok(url)
}
