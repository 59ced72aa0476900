use crate::storage::{read_link_set, write_link_set, StorageResult};
use std::collections::HashSet;
use std::path::PathBuf;

/// Durable set of URLs that have been fetched at least once.
///
/// The set is loaded once when the store is created and rewritten in full
/// after every insertion, so the on-disk file always equals the in-memory
/// set after a successful insert. A missing or unreadable file loads as an
/// empty set; prior runs are simply forgotten rather than failing the crawl.
pub struct ProcessedStore {
    path: PathBuf,
    links: HashSet<String>,
}

impl ProcessedStore {
    /// Loads the store from `path`, starting empty if the file is absent or
    /// cannot be parsed
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let links = match read_link_set(&path) {
            Ok(links) => {
                tracing::info!("Loaded {} processed links from {}", links.len(), path.display());
                links
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read processed links from {}, starting empty: {}",
                    path.display(),
                    e
                );
                HashSet::new()
            }
        };

        Self { path, links }
    }

    /// Checks whether a URL has already been processed
    pub fn contains(&self, url: &str) -> bool {
        self.links.contains(url)
    }

    /// The full set of processed URLs
    pub fn links(&self) -> &HashSet<String> {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Adds a URL and flushes the whole set to disk.
    ///
    /// On a write error the URL stays in the in-memory set; the caller keeps
    /// crawling with durability lost for this increment only.
    pub fn insert(&mut self, url: &str) -> StorageResult<()> {
        self.links.insert(url.to_string());
        write_link_set(&self.path, &self.links)
    }
}
