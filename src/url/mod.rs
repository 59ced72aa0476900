//! URL classification for the crawl
//!
//! Two pure decisions live here:
//! - whether an absolute URL is a listing page relative to the seed
//! - whether an absolute URL belongs to the crawled site at all

mod origin;
mod pattern;

pub use origin::within_site;
pub use pattern::ListingPattern;
