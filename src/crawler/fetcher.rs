//! HTTP fetcher implementation
//!
//! One GET per frontier URL, with a bounded timeout and a fixed identifying
//! User-Agent. There is no retry: a failed URL is forfeited for the rest of
//! the run and the traversal loop moves on.

use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page body
    Success {
        /// Raw response body
        body: String,
    },

    /// The server answered with a non-2xx status
    HttpStatus {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network-level failure (timeout, connection refused, body read error)
    Network {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for page fetches
///
/// # Arguments
///
/// * `user_agent` - Identifying User-Agent header sent with every request
/// * `timeout` - Per-request timeout
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the result
///
/// Any 2xx response yields `Success` with the body text. Non-2xx statuses
/// and network errors are reported as distinct outcomes so the caller can
/// log them separately; neither aborts the crawl.
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                return FetchOutcome::HttpStatus {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::Network {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            FetchOutcome::Network { error }
        }
    }
}
