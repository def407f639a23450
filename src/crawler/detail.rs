//! Detail page category resolution with bounded retries
//!
//! The retry driver only repeats a fetch after a transport failure. Once a
//! detail page has been fetched, the strategy chain in `category` decides the
//! outcome for that item: either a label or the default "Unknown".

use crate::crawler::category::resolve_category;
use crate::crawler::fetcher::fetch_url;
use crate::state::CategoryResolution;
use crate::Result;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::Instrument;
use url::Url;

/// Resolves the subcategory of an item from its detail page
#[derive(Debug, Clone)]
pub struct DetailResolver {
    client: Client,
    max_attempts: u32,
    backoff: Duration,
}

impl DetailResolver {
    /// Creates a resolver making at most `max_attempts` fetches per item
    ///
    /// `backoff` is multiplied by the number of failed attempts so far before
    /// each retry.
    pub fn new(client: Client, max_attempts: u32, backoff: Duration) -> Self {
        Self {
            client,
            max_attempts,
            backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the item's subcategory, or "Unknown"
    ///
    /// Never fails: transport errors are logged and retried until the attempt
    /// budget is spent.
    pub async fn resolve(&self, url: &Url, title: &str) -> String {
        let span = tracing::info_span!("detail", title = %title);
        self.resolve_inner(url, title).instrument(span).await
    }

    async fn resolve_inner(&self, url: &Url, title: &str) -> String {
        let mut state = CategoryResolution::new(self.max_attempts);

        while !state.is_terminal() {
            let attempt = state.begin_attempt();

            if attempt > 1 && !self.backoff.is_zero() {
                tokio::time::sleep(self.backoff * (attempt - 1)).await;
            }

            tracing::debug!("Fetching detail page for '{}': {}", title, url);

            match self.lookup(url).await {
                Ok(Some(label)) => state.resolve(label),
                Ok(None) => state.settle_unknown(),
                Err(e) if e.is_transport() => {
                    tracing::warn!(
                        "Request failed for '{}' (attempt {}/{}): {}",
                        title,
                        attempt,
                        self.max_attempts,
                        e
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to get subcategory for '{}': {}", title, e);
                    state.settle_unknown();
                }
            }
        }

        if !state.is_resolved() {
            tracing::warn!(
                "Could not determine subcategory for '{}' after {} attempt(s)",
                title,
                state.attempts()
            );
        }

        state.into_label()
    }

    /// One fetch plus the strategy chain over the fetched document
    async fn lookup(&self, url: &Url) -> Result<Option<String>> {
        let page = fetch_url(&self.client, url.as_str())
            .await
            .into_page(url.as_str())?;

        let document = Html::parse_document(&page.body);
        Ok(resolve_category(&document))
    }
}
