//! Listing page fetching and structure
//!
//! A listing page carries a grid of `article.product_pod` entries and, when
//! there is more to see, an `li.next > a` pagination control.

use crate::crawler::fetcher::fetch_url;
use crate::crawler::parser::{select_first_in, selector};
use crate::url::resolve_next_page;
use crate::Result;
use reqwest::Client;
use scraper::{ElementRef, Html};
use url::Url;

const ENTRY_SELECTOR: &str = "article.product_pod";
const NEXT_LINK_SELECTOR: &str = "li.next > a[href]";

/// A fetched and parsed listing page
pub struct ListingPage {
    url: Url,
    document: Html,
}

impl ListingPage {
    /// Parses a listing page body fetched from `url`
    pub fn parse(url: Url, body: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(body),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// All item entries on the page, in document order
    pub fn entries(&self) -> Vec<ElementRef<'_>> {
        match selector(ENTRY_SELECTOR) {
            Some(sel) => self.document.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    /// The next page link resolved against this page's URL, if present
    pub fn next_page(&self) -> Option<Url> {
        let link = select_first_in(&self.document, NEXT_LINK_SELECTOR)?;
        let href = link.value().attr("href")?;

        match resolve_next_page(href, &self.url) {
            Ok(next) => Some(next),
            Err(e) => {
                tracing::warn!("Ignoring unusable next link on {}: {}", self.url, e);
                None
            }
        }
    }
}

/// Fetches one listing page; no retries at this layer
///
/// # Returns
///
/// * `Ok(ListingPage)` - The parsed page, addressed by its final URL
/// * `Err(HarvestError)` - Transport failure; the crawl should stop here
pub async fn fetch_listing(client: &Client, url: &Url) -> Result<ListingPage> {
    let page = fetch_url(client, url.as_str())
        .await
        .into_page(url.as_str())?;

    Ok(ListingPage::parse(page.final_url, &page.body))
}
