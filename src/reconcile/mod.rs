//! Reconciliation pass
//!
//! Offline comparison of the persisted site inventory against the durable
//! processed set. Listing links that were observed during a run but never
//! recorded as processed end up in the missing-links file for the operator
//! to inspect. Nothing inside the system consumes that file.

use crate::storage::{read_link_set, write_link_set};
use crate::url::ListingPattern;
use std::collections::HashSet;
use std::path::Path;

/// Computes the set of listing links present in the saved inventory but
/// absent from the processed set.
///
/// Requires a prior completed run: when the inventory file is missing or
/// unreadable there is nothing to reconcile against, so the pass logs and
/// returns an empty set. The missing-links file is written only when the
/// result is non-empty.
pub fn reconcile(
    inventory_path: &Path,
    pattern: &ListingPattern,
    processed: &HashSet<String>,
    missing_path: &Path,
) -> HashSet<String> {
    let inventory = match read_link_set(inventory_path) {
        Ok(inventory) => inventory,
        Err(e) => {
            tracing::warn!(
                "No inventory to reconcile at {}: {}",
                inventory_path.display(),
                e
            );
            return HashSet::new();
        }
    };

    let missing: HashSet<String> = inventory
        .into_iter()
        .filter(|url| pattern.matches(url) && !processed.contains(url))
        .collect();

    if missing.is_empty() {
        tracing::info!("All listing links in the inventory are accounted for");
    } else {
        tracing::info!(
            "{} listing links were seen but never processed",
            missing.len()
        );
        if let Err(e) = write_link_set(missing_path, &missing) {
            tracing::error!(
                "Failed to write missing links to {}: {}",
                missing_path.display(),
                e
            );
        }
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use url::Url;

    fn pattern() -> ListingPattern {
        ListingPattern::new(&Url::parse("https://example.com").unwrap())
    }

    fn link_set(urls: &[&str]) -> HashSet<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_missing_listing_link_reported_and_written() {
        let dir = TempDir::new().unwrap();
        let inventory_path = dir.path().join("inventory.json");
        let missing_path = dir.path().join("missing.json");

        write_link_set(&inventory_path, &link_set(&["https://example.com/imovel/3/"])).unwrap();

        let missing = reconcile(&inventory_path, &pattern(), &HashSet::new(), &missing_path);

        assert_eq!(missing, link_set(&["https://example.com/imovel/3/"]));
        let written = read_link_set(&missing_path).unwrap();
        assert_eq!(written, missing);
    }

    #[test]
    fn test_processed_links_not_missing() {
        let dir = TempDir::new().unwrap();
        let inventory_path = dir.path().join("inventory.json");
        let missing_path = dir.path().join("missing.json");

        write_link_set(
            &inventory_path,
            &link_set(&["https://example.com/imovel/2/", "https://example.com/about"]),
        )
        .unwrap();

        let processed = link_set(&["https://example.com/imovel/2/"]);
        let missing = reconcile(&inventory_path, &pattern(), &processed, &missing_path);

        assert!(missing.is_empty());
        // Nothing to report, nothing written
        assert!(!missing_path.exists());
    }

    #[test]
    fn test_non_listing_links_ignored() {
        let dir = TempDir::new().unwrap();
        let inventory_path = dir.path().join("inventory.json");
        let missing_path = dir.path().join("missing.json");

        write_link_set(
            &inventory_path,
            &link_set(&["https://example.com/about", "https://example.com/contact"]),
        )
        .unwrap();

        let missing = reconcile(&inventory_path, &pattern(), &HashSet::new(), &missing_path);

        assert!(missing.is_empty());
        assert!(!missing_path.exists());
    }

    #[test]
    fn test_absent_inventory_reconciles_to_empty() {
        let dir = TempDir::new().unwrap();
        let missing = reconcile(
            &dir.path().join("absent.json"),
            &pattern(),
            &HashSet::new(),
            &dir.path().join("missing.json"),
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn test_mixed_inventory() {
        let dir = TempDir::new().unwrap();
        let inventory_path = dir.path().join("inventory.json");
        let missing_path = dir.path().join("missing.json");

        write_link_set(
            &inventory_path,
            &link_set(&[
                "https://example.com/imovel/1/",
                "https://example.com/imovel/2/",
                "https://example.com/about",
            ]),
        )
        .unwrap();

        let processed = link_set(&["https://example.com/imovel/1/"]);
        let missing = reconcile(&inventory_path, &pattern(), &processed, &missing_path);

        assert_eq!(missing, link_set(&["https://example.com/imovel/2/"]));
    }
}
