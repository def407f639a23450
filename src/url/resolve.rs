use crate::UrlError;
use url::Url;

/// Resolves a listing entry's href to the absolute detail page URL
///
/// # Resolution Rules
///
/// 1. An href that already starts with `http` is used as-is
/// 2. A single leading `../` is stripped
/// 3. If the base path already ends in `/<segment>/`, the href is joined directly
/// 4. If the href already begins with `<segment>/`, it is joined directly
/// 5. Otherwise `<segment>/` is prefixed before joining
///
/// # Examples
///
/// ```
/// use shelf_harvest::url::resolve_detail_url;
/// use url::Url;
///
/// let base = Url::parse("http://example.com/catalogue/").unwrap();
/// let url = resolve_detail_url("../book_1/index.html", &base, "catalogue").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/catalogue/book_1/index.html");
/// ```
pub fn resolve_detail_url(href: &str, base: &Url, catalog_segment: &str) -> Result<Url, UrlError> {
    let href = href.trim();

    if href.starts_with("http") {
        return Url::parse(href).map_err(|e| UrlError::Parse(format!("{}: {}", href, e)));
    }

    let cleaned = href.strip_prefix("../").unwrap_or(href);
    let segment_dir = format!("/{}/", catalog_segment);

    let relative = if base.path().ends_with(&segment_dir)
        || cleaned.starts_with(&segment_dir[1..])
    {
        cleaned.to_string()
    } else {
        format!("{}/{}", catalog_segment, cleaned)
    };

    base.join(&relative).map_err(|_| UrlError::Unresolvable {
        href: href.to_string(),
        base: base.to_string(),
    })
}

/// Resolves a pagination href relative to the page it appeared on
pub fn resolve_next_page(href: &str, current: &Url) -> Result<Url, UrlError> {
    let href = href.trim();

    if href.is_empty() {
        return Err(UrlError::Unresolvable {
            href: href.to_string(),
            base: current.to_string(),
        });
    }

    let next = current.join(href).map_err(|_| UrlError::Unresolvable {
        href: href.to_string(),
        base: current.to_string(),
    })?;

    if next.scheme() != "http" && next.scheme() != "https" {
        return Err(UrlError::InvalidScheme(next.scheme().to_string()));
    }

    Ok(next)
}
