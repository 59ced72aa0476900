//! Downstream delivery client
//!
//! Posts one extracted record per fetched page to a fixed endpoint. Delivery
//! is best-effort: an outcome other than `Delivered` is logged by the caller
//! and the crawl keeps going. There is no retry queue.

use crate::crawler::ExtractedRecord;
use reqwest::Client;
use std::time::Duration;

/// Result of a delivery attempt
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// The endpoint answered with a 2xx status
    Delivered,

    /// The endpoint answered with a non-2xx status
    Rejected {
        /// The HTTP status code
        status_code: u16,
        /// Response body, when it could be read
        detail: String,
    },

    /// Network-level failure before any response arrived
    Network {
        /// Error description
        error: String,
    },
}

/// Client for posting extracted records downstream
pub struct DeliveryClient {
    client: Client,
    endpoint: String,
}

impl DeliveryClient {
    /// Creates a delivery client for a fixed endpoint with a bounded timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Posts one record as a JSON body
    pub async fn deliver(&self, record: &ExtractedRecord) -> DeliveryOutcome {
        match self.client.post(&self.endpoint).json(record).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    DeliveryOutcome::Delivered
                } else {
                    let detail = response.text().await.unwrap_or_default();
                    DeliveryOutcome::Rejected {
                        status_code: status.as_u16(),
                        detail,
                    }
                }
            }
            Err(e) => DeliveryOutcome::Network {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record() -> ExtractedRecord {
        ExtractedRecord {
            source_link: "https://example.com/imovel/1/".to_string(),
            content: "Listing text".to_string(),
        }
    }

    #[tokio::test]
    async fn test_deliver_posts_record_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .and(body_json(serde_json::json!({
                "source_link": "https://example.com/imovel/1/",
                "content": "Listing text",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = DeliveryClient::new(
            &format!("{}/webhook", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        let outcome = client.deliver(&record()).await;
        assert!(matches!(outcome, DeliveryOutcome::Delivered));
    }

    #[tokio::test]
    async fn test_deliver_non_2xx_is_rejected_with_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = DeliveryClient::new(
            &format!("{}/webhook", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        match client.deliver(&record()).await {
            DeliveryOutcome::Rejected {
                status_code,
                detail,
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(detail, "boom");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_deliver_unreachable_is_network_error() {
        let client =
            DeliveryClient::new("http://127.0.0.1:1/webhook", Duration::from_secs(1)).unwrap();
        let outcome = client.deliver(&record()).await;
        assert!(matches!(outcome, DeliveryOutcome::Network { .. }));
    }
}
