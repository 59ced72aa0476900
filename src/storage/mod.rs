//! Durable link-set files
//!
//! All cross-run state is kept in UTF-8 JSON files, each holding a single
//! array of URL strings. Files are always rewritten whole; there is no
//! incremental format. Writes go through a sibling temp file followed by a
//! rename so a reader between runs never observes a torn file.

mod processed;

pub use processed::ProcessedStore;

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing link-set files
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Reads a JSON array of URL strings from `path`
pub fn read_link_set(path: &Path) -> StorageResult<HashSet<String>> {
    let content = std::fs::read_to_string(path)?;
    let links: Vec<String> = serde_json::from_str(&content)?;
    Ok(links.into_iter().collect())
}

/// Writes `links` to `path` as a JSON array of URL strings, replacing any
/// previous contents
///
/// The array is sorted so repeated saves of the same set produce identical
/// bytes. The data is first written to a sibling temp file and then renamed
/// over the target.
pub fn write_link_set(path: &Path, links: &HashSet<String>) -> StorageResult<()> {
    let mut sorted: Vec<&String> = links.iter().collect();
    sorted.sort();
    let content = serde_json::to_string_pretty(&sorted)?;

    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
