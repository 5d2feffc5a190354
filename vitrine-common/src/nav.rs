//! Active navigation link marking
//!
//! The current page and every nav link target are reduced to a canonical
//! directory-style path before comparison, so `/services/index.html`,
//! `/services` and `https://example.org/services/?ref=x` all match the
//! `/services/` page.

use url::Url;

const BASE: &str = "http://localhost/";

/// Canonical form of a page path or link href
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return "/".to_string();
    }

    let mut pathname = Url::parse(BASE)
        .and_then(|base| base.join(path))
        .map(|url| url.path().to_string())
        .unwrap_or_else(|_| strip_query_and_fragment(path).to_string());

    if pathname.to_ascii_lowercase().ends_with("index.html") {
        pathname.truncate(pathname.len() - "index.html".len());
    }
    if !pathname.starts_with('/') {
        pathname.insert(0, '/');
    }
    let trimmed_len = pathname.trim_end_matches('/').len();
    pathname.truncate(trimmed_len);
    pathname.push('/');
    pathname
}

fn strip_query_and_fragment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Index of the single nav link that points at the current page.
///
/// Links without an href are skipped. When several links resolve to the same
/// page, the first one wins so at most one entry is ever marked.
pub fn active_link<'a, I>(current_path: &str, hrefs: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let current = normalize_path(current_path);
    hrefs
        .into_iter()
        .position(|href| href.is_some_and(|href| normalize_path(href) == current))
}

/// Destination of a legacy `<button data-href>` call-to-action
pub fn legacy_target(data_href: Option<&str>) -> Option<&str> {
    data_href.map(str::trim).filter(|href| !href.is_empty())
}
