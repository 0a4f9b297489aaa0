use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use nullroute_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// Expected content type for DNS-over-HTTPS messages (RFC 8484 §4.2.1)
const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// DNS-over-HTTPS transport (RFC 8484)
pub struct HttpsTransport {
    url: String,
    client: reqwest::Client,
}

impl HttpsTransport {
    pub fn new(url: String) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::UpstreamFailure(format!("Failed to build DoH client: {}", e)))?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        debug!(url = %self.url, message_len = message_bytes.len(), "Sending DoH query");

        let exchange = async {
            // POST with application/dns-message (RFC 8484 §4.1)
            let response = self
                .client
                .post(&self.url)
                .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .body(message_bytes.to_vec())
                .send()
                .await
                .map_err(|e| {
                    DomainError::UpstreamFailure(format!("DoH request to {} failed: {}", self.url, e))
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(DomainError::UpstreamFailure(format!(
                    "DoH server {} returned HTTP {}",
                    self.url,
                    status.as_u16()
                )));
            }

            response.bytes().await.map_err(|e| {
                DomainError::UpstreamFailure(format!(
                    "Failed to read DoH response from {}: {}",
                    self.url, e
                ))
            })
        };

        let bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| DomainError::QueryTimeout(timeout.as_millis() as u64))??;

        debug!(url = %self.url, response_len = bytes.len(), "DoH response received");

        Ok(TransportResponse {
            bytes,
            protocol_used: "HTTPS",
        })
    }
}
