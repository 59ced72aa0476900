use crate::config::types::{Config, CrawlerConfig, DeliveryConfig, ServerConfig, StorageConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_delivery_config(&config.delivery)?;
    validate_storage_config(&config.storage)?;
    validate_server_config(&config.server)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be >= 1, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates delivery configuration
fn validate_delivery_config(config: &DeliveryConfig) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&config.endpoint_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid endpoint_url: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "endpoint_url must be http or https, got '{}'",
            endpoint.scheme()
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "delivery timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates the link-set file paths
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    for (name, path) in [
        ("processed_links_path", &config.processed_links_path),
        ("inventory_path", &config.inventory_path),
        ("missing_links_path", &config.missing_links_path),
    ] {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.bind_address.is_empty() {
        return Err(ConfigError::Validation(
            "bind_address cannot be empty".to_string(),
        ));
    }

    if config.port == 0 {
        return Err(ConfigError::Validation(
            "port must be non-zero".to_string(),
        ));
    }

    Ok(())
}
