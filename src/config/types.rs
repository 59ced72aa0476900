use serde::Deserialize;

/// Main configuration structure for Listing-Relay
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub delivery: DeliveryConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Timeout for each page fetch, in seconds
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Pause between consecutive fetch attempts, in milliseconds
    #[serde(rename = "inter-fetch-delay-ms", default = "default_inter_fetch_delay")]
    pub inter_fetch_delay_ms: u64,

    /// User-Agent header sent with every fetch
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Downstream delivery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    /// Endpoint that receives one POST per extracted page
    #[serde(rename = "endpoint-url")]
    pub endpoint_url: String,

    /// Timeout for each delivery POST, in seconds
    #[serde(rename = "timeout-secs", default = "default_delivery_timeout")]
    pub timeout_secs: u64,
}

/// Paths of the durable link-set files
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Cross-run record of URLs already fetched
    #[serde(rename = "processed-links-path")]
    pub processed_links_path: String,

    /// Full same-site link inventory of the last completed run
    #[serde(rename = "inventory-path")]
    pub inventory_path: String,

    /// Listing links seen but never processed, written by reconciliation
    #[serde(rename = "missing-links-path")]
    pub missing_links_path: String,
}

/// HTTP surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP surface to
    #[serde(rename = "bind-address", default = "default_bind_address")]
    pub bind_address: String,

    /// Port for the HTTP surface
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_inter_fetch_delay() -> u64 {
    1000
}

fn default_user_agent() -> String {
    format!("ListingRelay/{}", env!("CARGO_PKG_VERSION"))
}

fn default_delivery_timeout() -> u64 {
    10
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}
