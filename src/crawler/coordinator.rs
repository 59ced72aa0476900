//! Traversal engine
//!
//! Owns the per-run state of one crawl: the FIFO frontier, the in-run
//! visited set, and the accumulated site inventory. The durable processed
//! store and the delivery client are the only collaborators with side
//! effects that outlive the loop body.

use crate::config::Config;
use crate::crawler::extractor::extract;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchOutcome};
use crate::crawler::parser::{candidate_links, site_links};
use crate::delivery::{DeliveryClient, DeliveryOutcome};
use crate::storage::{write_link_set, ProcessedStore};
use crate::url::ListingPattern;
use crate::RelayError;
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Crawl coordinator for one site
///
/// Constructed per crawl; loads the processed store once at construction.
pub struct Coordinator {
    client: Client,
    delivery: DeliveryClient,
    processed: ProcessedStore,
    inventory_path: PathBuf,
    inter_fetch_delay: Duration,
}

impl Coordinator {
    /// Creates a coordinator from the configuration
    ///
    /// Loads the durable processed store and builds both HTTP clients. The
    /// store read degrades to empty on failure; client construction errors
    /// are fatal since nothing can be fetched or delivered without them.
    pub fn new(config: &Config) -> Result<Self, RelayError> {
        let client = build_http_client(
            &config.crawler.user_agent,
            Duration::from_secs(config.crawler.fetch_timeout_secs),
        )?;

        let delivery = DeliveryClient::new(
            &config.delivery.endpoint_url,
            Duration::from_secs(config.delivery.timeout_secs),
        )?;

        let processed = ProcessedStore::load(&config.storage.processed_links_path);

        Ok(Self {
            client,
            delivery,
            processed,
            inventory_path: PathBuf::from(&config.storage.inventory_path),
            inter_fetch_delay: Duration::from_millis(config.crawler.inter_fetch_delay_ms),
        })
    }

    /// The processed store backing this coordinator
    pub fn processed(&self) -> &ProcessedStore {
        &self.processed
    }

    /// Runs a full traversal from `seed` and returns the site inventory.
    ///
    /// The seed is enqueued unconditionally, even when already processed,
    /// so every run re-checks the entry page for new outbound links. Only
    /// discovered links are filtered against the processed store.
    pub async fn run(&mut self, seed: &Url) -> Result<HashSet<String>, RelayError> {
        let pattern = ListingPattern::new(seed);

        let mut frontier: VecDeque<String> = VecDeque::new();
        frontier.push_back(seed.to_string());

        let mut visited: HashSet<String> = HashSet::new();
        let mut inventory: HashSet<String> = HashSet::new();

        tracing::info!("Starting crawl from {}", seed);

        while let Some(current) = frontier.pop_front() {
            // Duplicate enqueues are resolved here, not at insertion time
            if visited.contains(&current) {
                tracing::debug!("Skipping already visited URL: {}", current);
                continue;
            }

            match fetch_url(&self.client, &current).await {
                FetchOutcome::Success { body } => {
                    visited.insert(current.clone());

                    // Mark processed right away; delivery outcome never
                    // changes durable state.
                    if let Err(e) = self.processed.insert(&current) {
                        tracing::error!(
                            "Failed to persist processed link {}: {}",
                            current,
                            e
                        );
                    }

                    let record = extract(&body, &current);
                    match self.delivery.deliver(&record).await {
                        DeliveryOutcome::Delivered => {
                            tracing::info!("Delivered {}", current);
                        }
                        DeliveryOutcome::Rejected {
                            status_code,
                            detail,
                        } => {
                            tracing::error!(
                                "Delivery rejected for {} with status {}: {}",
                                current,
                                status_code,
                                detail
                            );
                        }
                        DeliveryOutcome::Network { error } => {
                            tracing::error!("Delivery failed for {}: {}", current, error);
                        }
                    }

                    match Url::parse(&current) {
                        Ok(page_url) => {
                            for link in candidate_links(
                                &body,
                                &page_url,
                                &pattern,
                                &visited,
                                self.processed.links(),
                            ) {
                                frontier.push_back(link);
                            }

                            inventory.extend(site_links(&body, &page_url, seed));
                        }
                        Err(e) => {
                            tracing::warn!("Cannot resolve links against {}: {}", current, e);
                        }
                    }
                }

                FetchOutcome::HttpStatus { status_code } => {
                    // Not visited, not processed, not retried this run
                    tracing::warn!("Fetch of {} returned status {}", current, status_code);
                }

                FetchOutcome::Network { error } => {
                    tracing::warn!("Fetch of {} failed: {}", current, error);
                }
            }

            // A failed request still counts against the request-rate bound
            tokio::time::sleep(self.inter_fetch_delay).await;
        }

        tracing::info!(
            "Crawl complete: {} pages fetched, {} links in inventory",
            visited.len(),
            inventory.len()
        );

        if let Err(e) = write_link_set(&self.inventory_path, &inventory) {
            tracing::error!(
                "Failed to persist inventory to {}: {}",
                self.inventory_path.display(),
                e
            );
        }

        Ok(inventory)
    }
}
