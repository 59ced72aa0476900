//! Configuration module for Listing-Relay
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use listing_relay::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Delivery endpoint: {}", config.delivery.endpoint_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, DeliveryConfig, ServerConfig, StorageConfig};

// Re-export parser functions
pub use parser::load_config;
