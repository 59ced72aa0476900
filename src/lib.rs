//! Listing-Relay: a single-site listing crawler with webhook delivery
//!
//! This crate implements a crawler that walks one website from a seed URL,
//! extracts the text of listing pages, forwards each extracted record to a
//! downstream HTTP endpoint, and keeps a durable record of every page it has
//! fetched so nothing is re-delivered across runs.

pub mod config;
pub mod crawler;
pub mod delivery;
pub mod reconcile;
pub mod server;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Listing-Relay operations
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Listing-Relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, ExtractedRecord};
pub use crate::url::{within_site, ListingPattern};
