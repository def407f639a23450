//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: pagination state machine owned by the crawl controller
//! - `CategoryResolution`: per-item attempt tracking for detail page lookups

mod crawl_state;
mod resolution_state;

// Re-export main types
pub use crawl_state::{CrawlPhase, CrawlState, DoneReason};
pub use resolution_state::CategoryResolution;
