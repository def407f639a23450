//! Category resolution strategies for detail pages
//!
//! Each strategy is a pure function over one parsed document. They are tried
//! in order and the first one yielding a usable label wins.

use crate::crawler::parser::{element_text, select_first_in, selector};
use crate::records::UNKNOWN_SUBCATEGORY;
use scraper::Html;

/// A single way of reading a category label off a detail page
pub type CategoryStrategy = fn(&Html) -> Option<String>;

/// Strategies in the order they are tried
pub const STRATEGIES: &[(&str, CategoryStrategy)] = &[
    ("breadcrumb", breadcrumb_category),
    ("active-nav", active_nav_category),
];

/// Runs the strategy chain and returns the first usable label
pub fn resolve_category(document: &Html) -> Option<String> {
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let label = strategy(document).filter(|l| is_usable(l))?;
        tracing::debug!("Category '{}' resolved via {}", label, name);
        Some(label)
    })
}

fn is_usable(label: &str) -> bool {
    !label.is_empty() && label != UNKNOWN_SUBCATEGORY
}

/// Third entry of `ul.breadcrumb`, when the trail has at least three entries
///
/// Home > Books > Poetry > Title yields "Poetry".
pub fn breadcrumb_category(document: &Html) -> Option<String> {
    let breadcrumb = select_first_in(document, "ul.breadcrumb")?;
    let li = selector("li")?;

    breadcrumb.select(&li).nth(2).map(element_text)
}

/// The `active` entry of the hierarchical `ul.nav-list` category menu
pub fn active_nav_category(document: &Html) -> Option<String> {
    // Only trust the active marker when the nested category list is really there
    select_first_in(document, "ul.nav-list > li > ul > li > a")?;

    select_first_in(document, "ul.nav-list > li > ul > li.active > a").map(element_text)
}
