//! Shared fixtures: config builders and a small mock catalog

use shelf_harvest::config::{
    Config, OutputConfig, RawDataEntry, ScraperConfig, SourceEntry, UserAgentConfig,
};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One listing entry of the mock catalog
pub struct Book {
    pub title: &'static str,
    pub href: &'static str,
    pub price: &'static str,
    pub rating: &'static str,
    pub availability: &'static str,
}

pub fn scraper_config(max_pages: Option<u32>) -> ScraperConfig {
    ScraperConfig {
        max_retries: 2,
        request_timeout: 5,
        retry_backoff: 0,
        max_pages,
        catalog_segment: "catalogue".to_string(),
    }
}

pub fn user_agent() -> UserAgentConfig {
    UserAgentConfig {
        crawler_name: "TestHarvester".to_string(),
        crawler_version: "1.0".to_string(),
        contact_url: Some("https://example.com/contact".to_string()),
    }
}

/// Creates a config with one source and one raw data entry, both id "102"
pub fn test_config(
    dir: &Path,
    source_url: &str,
    raw_path: &Path,
    max_pages: Option<u32>,
) -> Config {
    Config {
        scraper: scraper_config(max_pages),
        user_agent: user_agent(),
        output: OutputConfig {
            raw_data_dir: dir.join("raw_data").display().to_string(),
            processed_data_dir: dir.join("processed_data").display().to_string(),
        },
        sources: vec![SourceEntry {
            id: "102".to_string(),
            url: source_url.to_string(),
        }],
        raw_data: vec![RawDataEntry {
            id: "102".to_string(),
            path: raw_path.display().to_string(),
        }],
    }
}

/// Renders a listing page in the catalog's markup
pub fn listing_html(books: &[Book], next: Option<&str>) -> String {
    let mut html = String::from("<html><body><section><ol class=\"row\">");

    for book in books {
        html.push_str(&format!(
            r#"<li><article class="product_pod">
                <p class="star-rating {rating}"><i class="icon-star"></i></p>
                <h3><a href="{href}" title="{title}">{title}</a></h3>
                <div class="product_price">
                    <p class="price_color">{price}</p>
                    <p class="instock availability"><i class="icon-ok"></i> {availability} </p>
                </div>
            </article></li>"#,
            rating = book.rating,
            href = book.href,
            title = book.title,
            price = book.price,
            availability = book.availability,
        ));
    }

    html.push_str("</ol>");
    if let Some(next) = next {
        html.push_str(&format!(
            r#"<ul class="pager"><li class="next"><a href="{}">next</a></li></ul>"#,
            next
        ));
    }
    html.push_str("</section></body></html>");
    html
}

/// Renders a detail page with a full breadcrumb
pub fn breadcrumb_detail(category: &str) -> String {
    format!(
        r#"<html><body><ul class="breadcrumb">
            <li><a href="/">Home</a></li>
            <li><a href="/books">Books</a></li>
            <li><a href="/cat">{}</a></li>
            <li class="active">Item</li>
        </ul></body></html>"#,
        category
    )
}

/// Renders a detail page whose category only shows in the side navigation
pub fn nav_only_detail(category: &str) -> String {
    format!(
        r#"<html><body><ul class="nav nav-list"><li><a href="/books">Books</a><ul>
            <li><a href="/travel">Travel</a></li>
            <li class="active"><a href="/cat">{}</a></li>
        </ul></li></ul></body></html>"#,
        category
    )
}

pub async fn mount_html(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a three page catalog
///
/// Page 1 is served at `/`, pages 2 and 3 under `/catalogue/`. The detail
/// page of the third book always answers 500.
pub async fn mount_catalog(server: &MockServer) {
    mount_html(
        server,
        "/",
        listing_html(
            &[
                Book {
                    title: "A Light in the Attic",
                    href: "catalogue/a-light-in-the-attic_1000/index.html",
                    price: "£51.77",
                    rating: "Three",
                    availability: "In stock",
                },
                Book {
                    title: "Tipping the Velvet",
                    href: "catalogue/tipping-the-velvet_999/index.html",
                    price: "£53.74",
                    rating: "One",
                    availability: "In stock",
                },
            ],
            Some("catalogue/page-2.html"),
        ),
    )
    .await;

    mount_html(
        server,
        "/catalogue/page-2.html",
        listing_html(
            &[Book {
                title: "Soumission",
                href: "soumission_998/index.html",
                price: "£50.10",
                rating: "One",
                availability: "Out of stock",
            }],
            Some("page-3.html"),
        ),
    )
    .await;

    mount_html(
        server,
        "/catalogue/page-3.html",
        listing_html(
            &[Book {
                title: "Sharp Objects",
                href: "sharp-objects_997/index.html",
                price: "£47.82",
                rating: "Four",
                availability: "In stock",
            }],
            None,
        ),
    )
    .await;

    mount_html(
        server,
        "/catalogue/a-light-in-the-attic_1000/index.html",
        breadcrumb_detail("Poetry"),
    )
    .await;
    mount_html(
        server,
        "/catalogue/tipping-the-velvet_999/index.html",
        nav_only_detail("Historical Fiction"),
    )
    .await;
    mount_html(
        server,
        "/catalogue/soumission_998/index.html",
        breadcrumb_detail("Fiction"),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/catalogue/sharp-objects_997/index.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}
