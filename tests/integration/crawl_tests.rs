//! Crawl tests: pagination, category resolution and the crawl trigger

use crate::common::{
    listing_html, mount_catalog, mount_html, scraper_config, test_config, user_agent, Book,
};
use shelf_harvest::crawler::crawl;
use shelf_harvest::state::DoneReason;
use shelf_harvest::storage::read_raw_records;
use shelf_harvest::trigger::{run_scraper, TriggerContext};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.uri())).unwrap()
}

#[tokio::test]
async fn test_full_crawl_follows_every_page() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let outcome = crawl(base_url(&server), &scraper_config(None), &user_agent())
        .await
        .unwrap();

    let titles: Vec<&str> = outcome.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "A Light in the Attic",
            "Tipping the Velvet",
            "Soumission",
            "Sharp Objects"
        ]
    );

    assert_eq!(outcome.stats.pages_visited, 3);
    assert_eq!(outcome.stats.records, 4);
    assert_eq!(outcome.stats.done_reason, Some(DoneReason::NoNextPage));
}

#[tokio::test]
async fn test_record_fields_and_categories() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let outcome = crawl(base_url(&server), &scraper_config(None), &user_agent())
        .await
        .unwrap();
    let records = outcome.records;

    assert_eq!(records[0].price, "£51.77");
    assert_eq!(records[0].rating, 3);
    assert_eq!(records[0].availability, "In stock");
    assert_eq!(
        records[0].url,
        format!("{}/catalogue/a-light-in-the-attic_1000/index.html", server.uri())
    );
    assert_eq!(records[0].subcategory, "Poetry");

    // Resolved from the side navigation
    assert_eq!(records[1].subcategory, "Historical Fiction");

    assert_eq!(
        records[2].url,
        format!("{}/catalogue/soumission_998/index.html", server.uri())
    );
    assert_eq!(records[2].availability, "Out of stock");
    assert_eq!(records[2].subcategory, "Fiction");

    // Detail page always fails
    assert_eq!(records[3].subcategory, "Unknown");
    assert_eq!(outcome.stats.unknown_subcategories, 1);
}

#[tokio::test]
async fn test_page_ceiling_stops_before_next_fetch() {
    let server = MockServer::start().await;

    mount_html(
        &server,
        "/",
        listing_html(
            &[Book {
                title: "Only Book",
                href: "catalogue/only_1/index.html",
                price: "£1.00",
                rating: "Two",
                availability: "In stock",
            }],
            Some("catalogue/page-2.html"),
        ),
    )
    .await;
    mount_html(
        &server,
        "/catalogue/only_1/index.html",
        crate::common::breadcrumb_detail("Poetry"),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/catalogue/page-2.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[], None)))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = crawl(base_url(&server), &scraper_config(Some(1)), &user_agent())
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.stats.pages_visited, 1);
    assert_eq!(outcome.stats.done_reason, Some(DoneReason::PageCeiling));
}

#[tokio::test]
async fn test_listing_failure_keeps_earlier_records() {
    let server = MockServer::start().await;

    mount_html(
        &server,
        "/",
        listing_html(
            &[Book {
                title: "First",
                href: "catalogue/first_1/index.html",
                price: "£2.00",
                rating: "Five",
                availability: "In stock",
            }],
            Some("catalogue/page-2.html"),
        ),
    )
    .await;
    mount_html(
        &server,
        "/catalogue/first_1/index.html",
        crate::common::breadcrumb_detail("Travel"),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/catalogue/page-2.html"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = crawl(base_url(&server), &scraper_config(None), &user_agent())
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].title, "First");
    assert_eq!(outcome.stats.done_reason, Some(DoneReason::FetchFailed));
}

#[tokio::test]
async fn test_malformed_entry_is_skipped() {
    let server = MockServer::start().await;

    let mut html = listing_html(
        &[
            Book {
                title: "Good",
                href: "catalogue/good_1/index.html",
                price: "£3.00",
                rating: "Three",
                availability: "In stock",
            },
            Book {
                title: "Broken",
                href: "catalogue/broken_2/index.html",
                price: "£4.00",
                rating: "Three",
                availability: "In stock",
            },
        ],
        None,
    );
    html = html.replace(r#"<p class="price_color">£4.00</p>"#, "");
    mount_html(&server, "/", html).await;
    mount_html(
        &server,
        "/catalogue/good_1/index.html",
        crate::common::breadcrumb_detail("Poetry"),
    )
    .await;

    let outcome = crawl(base_url(&server), &scraper_config(None), &user_agent())
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].title, "Good");
    assert_eq!(outcome.stats.dropped_entries, 1);
}

#[tokio::test]
async fn test_crawl_trigger_writes_raw_file() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(
        dir.path(),
        &format!("{}/", server.uri()),
        &dir.path().join("unused.csv"),
        None,
    );

    let result = run_scraper(TriggerContext::from_config(&config), "102").await;

    assert_eq!(result.status_code, 200);
    assert_eq!(result.message, "Scraping completed successfully");

    let expected = dir.path().join("raw_data").join("books_data.csv");
    assert_eq!(result.path, Some(expected.display().to_string()));

    let records = read_raw_records(&expected).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title, "A Light in the Attic");
    assert_eq!(records[3].subcategory, "Unknown");
}

#[tokio::test]
async fn test_crawl_trigger_unreachable_source_writes_header_only() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dir = TempDir::new().unwrap();
    let config = test_config(
        dir.path(),
        &format!("http://127.0.0.1:{}/", port),
        &dir.path().join("unused.csv"),
        None,
    );

    let result = run_scraper(TriggerContext::from_config(&config), "102").await;
    assert_eq!(result.status_code, 200);

    let raw = dir.path().join("raw_data").join("books_data.csv");
    let written = std::fs::read_to_string(raw).unwrap();
    assert_eq!(written, "Title,Price,Rating,Availability,URL,Subcategory\n");
}

#[tokio::test]
async fn test_crawl_trigger_unknown_source() {
    let dir = TempDir::new().unwrap();
    let config = test_config(
        dir.path(),
        "http://127.0.0.1:1/",
        &dir.path().join("unused.csv"),
        None,
    );

    let result = run_scraper(TriggerContext::from_config(&config), "does-not-exist").await;

    assert_eq!(result.status_code, 500);
    assert_eq!(result.message, "Scraping failed");
    assert!(result.path.is_none());
    assert!(!dir.path().join("raw_data").exists());
}
