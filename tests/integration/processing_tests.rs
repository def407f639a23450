//! Processing tests: the cleaning trigger and crawl-to-dataset runs

use crate::common::{mount_catalog, test_config};
use shelf_harvest::storage::load_dataset;
use shelf_harvest::trigger::{run_processing, run_scraper, TriggerContext};
use shelf_harvest::Availability;
use tempfile::TempDir;
use wiremock::MockServer;

const SCENARIO: &str = "Title,Price,Rating,Availability,URL\n\
Book1,10.00,4,in stock,http://test\n\
Book2,15.50,6,out of stock,http://test\n\
Book3,invalid,3,in stock,http://test\n\
,20.00,2,,http://test\n";

#[test]
fn test_processing_trigger_scenario() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw.csv");
    std::fs::write(&raw, SCENARIO).unwrap();

    let config = test_config(dir.path(), "http://127.0.0.1:1/", &raw, None);
    let result = run_processing(TriggerContext::from_config(&config), "102");

    assert_eq!(result.status_code, 200);
    assert_eq!(result.message, "Processing completed successfully");

    let dataset = dir.path().join("processed_data").join("books_data.db");
    assert_eq!(result.path, Some(dataset.display().to_string()));

    let rows = load_dataset(&dataset).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Book1");
    assert_eq!(rows[0].price, 10.0);
    assert_eq!(rows[0].rating, 4);
    assert_eq!(rows[0].availability, Availability::InStock);
    assert_eq!(rows[0].url, "http://test");
}

#[test]
fn test_processing_twice_gives_same_dataset() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw.csv");
    std::fs::write(&raw, SCENARIO).unwrap();
    let config = test_config(dir.path(), "http://127.0.0.1:1/", &raw, None);
    let ctx = TriggerContext::from_config(&config);

    let first = run_processing(ctx, "102");
    let first_bytes = std::fs::read(first.path.as_deref().unwrap()).unwrap();
    let second = run_processing(ctx, "102");
    let second_bytes = std::fs::read(second.path.as_deref().unwrap()).unwrap();

    assert_eq!(first, second);
    assert!(!first_bytes.is_empty());
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_processing_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw.csv");
    std::fs::write(&raw, "Title,Price,Rating,URL\nBook1,10.00,4,http://test\n").unwrap();

    let config = test_config(dir.path(), "http://127.0.0.1:1/", &raw, None);
    let result = run_processing(TriggerContext::from_config(&config), "102");

    assert_eq!(result.status_code, 500);
    assert_eq!(result.message, "Processing failed");
    assert!(result.error.unwrap().contains("Availability"));
    assert!(!dir.path().join("processed_data").join("books_data.db").exists());
}

#[tokio::test]
async fn test_crawl_then_process() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw_data").join("books_data.csv");
    let config = test_config(dir.path(), &format!("{}/", server.uri()), &raw, None);
    let ctx = TriggerContext::from_config(&config);

    let crawled = run_scraper(ctx, "102").await;
    assert!(crawled.is_success());

    let processed = run_processing(ctx, "102");
    assert!(processed.is_success());

    let dataset = std::path::PathBuf::from(processed.path.unwrap());
    let rows = load_dataset(&dataset).unwrap();
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "A Light in the Attic",
            "Tipping the Velvet",
            "Soumission",
            "Sharp Objects"
        ]
    );
    assert_eq!(rows[0].price, 51.77);
    assert_eq!(rows[0].rating, 3);
    assert_eq!(rows[2].availability, Availability::OutOfStock);
    assert!(rows.iter().all(|r| r.is_valid()));
}
