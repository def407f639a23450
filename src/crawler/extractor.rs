//! Listing entry extraction
//!
//! Turning an entry into a record happens in two steps: `parse_entry` reads
//! everything the listing itself shows, then `extract` asks the detail
//! resolver for the category. Splitting them keeps the parsed document out of
//! the awaiting part of the crawl.

use crate::crawler::detail::DetailResolver;
use crate::crawler::parser::{element_text, select_first};
use crate::records::{rating_from_code, RawBookRecord};
use crate::url::resolve_detail_url;
use crate::{HarvestError, Result};
use scraper::ElementRef;
use url::Url;

/// Fields read from one listing entry, before category resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    /// Price text including its currency symbol
    pub price: String,
    pub rating: u8,
    pub availability: String,
    pub detail_url: Url,
}

/// Builds raw records from listing entries
#[derive(Debug, Clone)]
pub struct ItemExtractor {
    base_url: Url,
    catalog_segment: String,
}

impl ItemExtractor {
    /// Creates an extractor resolving detail links against `base_url`
    pub fn new(base_url: Url, catalog_segment: impl Into<String>) -> Self {
        Self {
            base_url,
            catalog_segment: catalog_segment.into(),
        }
    }

    /// Reads the listing fields of one `article.product_pod`
    ///
    /// # Errors
    ///
    /// `HarvestError::Extraction` when a required element or attribute is
    /// missing, or the detail link cannot be resolved.
    pub fn parse_entry(&self, entry: ElementRef<'_>) -> Result<ListingEntry> {
        let link = select_first(entry, "h3 a")
            .ok_or_else(|| HarvestError::extraction("entry has no title link"))?;

        let title = link
            .value()
            .attr("title")
            .ok_or_else(|| HarvestError::extraction("title link has no title attribute"))?
            .to_string();

        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| HarvestError::extraction(format!("'{}' has no href", title)))?;

        let price = select_first(entry, "div.product_price p.price_color")
            .map(element_text)
            .ok_or_else(|| HarvestError::extraction(format!("'{}' has no price", title)))?;

        let rating_code = select_first(entry, "p.star-rating")
            .and_then(|p| p.value().classes().find(|c| *c != "star-rating"))
            .ok_or_else(|| HarvestError::extraction(format!("'{}' has no rating", title)))?;

        let availability = select_first(entry, "div.product_price p.availability")
            .map(element_text)
            .ok_or_else(|| {
                HarvestError::extraction(format!("'{}' has no availability", title))
            })?;

        let detail_url = resolve_detail_url(href, &self.base_url, &self.catalog_segment)?;

        Ok(ListingEntry {
            title,
            price,
            rating: rating_from_code(rating_code),
            availability,
            detail_url,
        })
    }

    /// Completes a parsed entry with its resolved subcategory
    pub async fn extract(&self, entry: ListingEntry, resolver: &DetailResolver) -> RawBookRecord {
        let subcategory = resolver.resolve(&entry.detail_url, &entry.title).await;

        RawBookRecord {
            title: entry.title,
            price: entry.price,
            rating: entry.rating,
            availability: entry.availability,
            url: entry.detail_url.to_string(),
            subcategory,
        }
    }
}
