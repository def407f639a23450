//! End-to-end tests against a mock catalog served by wiremock

mod common;
mod crawl_tests;
mod processing_tests;
