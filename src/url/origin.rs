use url::Url;

/// Checks whether a candidate URL belongs to the crawled site.
///
/// The candidate must share the seed's scheme, host, and port, and its path
/// must extend the seed's path at a segment boundary. This is stricter than
/// a raw string-prefix test: `https://example.com-other/` does not pass for
/// a seed of `https://example.com`, and `/docs-archive` does not pass for a
/// seed rooted at `/docs`.
pub fn within_site(seed: &Url, candidate: &Url) -> bool {
    if candidate.scheme() != seed.scheme()
        || candidate.host_str() != seed.host_str()
        || candidate.port_or_known_default() != seed.port_or_known_default()
    {
        return false;
    }

    let seed_path = seed.path().trim_end_matches('/');
    if seed_path.is_empty() {
        // Seed rooted at "/": every path on the origin is in scope
        return true;
    }

    match candidate.path().strip_prefix(seed_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
