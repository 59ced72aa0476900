use url::Url;

/// Matcher for listing-page URLs, anchored at the crawl's seed URL.
///
/// A URL is a listing page when it has the form
/// `<seed>/imovel/<digits>/...`: the seed prefix, the literal `imovel`
/// segment, one or more ASCII digits, and a trailing slash. The check is
/// structural; the seed is never escaped into a regular expression.
///
/// # Examples
///
/// ```
/// use listing_relay::url::ListingPattern;
/// use url::Url;
///
/// let seed = Url::parse("https://example.com").unwrap();
/// let pattern = ListingPattern::new(&seed);
///
/// assert!(pattern.matches("https://example.com/imovel/123/detail"));
/// assert!(!pattern.matches("https://example.com/imovel/abc/detail"));
/// assert!(!pattern.matches("https://example.com/other"));
/// ```
#[derive(Debug, Clone)]
pub struct ListingPattern {
    prefix: String,
}

impl ListingPattern {
    /// Builds the matcher from the parsed seed URL
    pub fn new(seed: &Url) -> Self {
        let prefix = format!("{}/imovel/", seed.as_str().trim_end_matches('/'));
        Self { prefix }
    }

    /// Checks whether an absolute URL string is a listing page
    pub fn matches(&self, candidate: &str) -> bool {
        let rest = match candidate.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest,
            None => return false,
        };

        // One or more digits, then a slash. ASCII digits are single bytes,
        // so the byte count doubles as the slice offset.
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        digits > 0 && rest[digits..].starts_with('/')
    }
}
