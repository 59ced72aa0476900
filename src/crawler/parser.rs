//! Anchor extraction and link projections
//!
//! Every fetched page goes through two independent passes over its anchors:
//! the frontier projection keeps not-yet-seen listing candidates, and the
//! inventory projection keeps every link that belongs to the crawled site.

use crate::url::{within_site, ListingPattern};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts all anchor targets from `html`, resolved to absolute form
/// against `page_url`
///
/// Excluded:
/// - `javascript:`, `mailto:`, `tel:` and data URIs
/// - fragment-only links (same page anchors)
/// - anything that does not resolve to an http(s) URL
pub fn extract_anchors(html: &str, page_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to build anchor selector: {:?}", e);
            return Vec::new();
        }
    };

    let mut anchors = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(resolved) = resolve_link(href, page_url) {
                anchors.push(resolved);
            }
        }
    }
    anchors
}

/// Resolves a link href to an absolute URL and validates it
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links
    if href.starts_with('#') {
        return None;
    }

    match page_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// Frontier projection: listing-page candidates not yet seen.
///
/// Keeps anchors that match the listing pattern (anchored at the crawl's
/// seed, not the current page) and are in neither the in-run visited set nor
/// the durable processed set.
pub fn candidate_links(
    html: &str,
    page_url: &Url,
    pattern: &ListingPattern,
    visited: &HashSet<String>,
    processed: &HashSet<String>,
) -> HashSet<String> {
    extract_anchors(html, page_url)
        .into_iter()
        .map(|u| u.to_string())
        .filter(|u| pattern.matches(u) && !visited.contains(u) && !processed.contains(u))
        .collect()
}

/// Inventory projection: every link on the page that belongs to the site
/// rooted at `seed`, regardless of pattern match
pub fn site_links(html: &str, page_url: &Url, seed: &Url) -> HashSet<String> {
    extract_anchors(html, page_url)
        .into_iter()
        .filter(|u| within_site(seed, u))
        .map(|u| u.to_string())
        .collect()
}
