use super::transport::Transport;
use async_trait::async_trait;
use bytes::Bytes;
use nullroute_application::ports::UpstreamResolverPort;
use nullroute_domain::config::{UpstreamConfig, UpstreamProtocol};
use nullroute_domain::packet::{transaction_id, DNS_HEADER_LEN};
use nullroute_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Forwards raw queries to one of a fixed set of upstream transports.
///
/// Each call picks the next transport in round-robin order and makes exactly
/// one attempt. Replies shorter than a DNS header, or carrying a different
/// transaction id than the query, are reported as failures.
pub struct UpstreamResolver {
    transports: Vec<Transport>,
    next: AtomicUsize,
    timeout: Duration,
}

impl UpstreamResolver {
    pub fn new(transports: Vec<Transport>, timeout: Duration) -> Result<Self, DomainError> {
        if transports.is_empty() {
            return Err(DomainError::UpstreamFailure(
                "no upstream servers configured".to_string(),
            ));
        }
        Ok(Self {
            transports,
            next: AtomicUsize::new(0),
            timeout,
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let transports: Vec<Transport> = match config.protocol {
            UpstreamProtocol::Udp => config
                .server_addrs()
                .map_err(|bad| {
                    DomainError::UpstreamFailure(format!("invalid upstream address: {}", bad))
                })?
                .into_iter()
                .map(Transport::udp)
                .collect(),
            #[cfg(feature = "dns-over-https")]
            UpstreamProtocol::Https => vec![Transport::https(config.doh_url.clone())?],
            #[cfg(not(feature = "dns-over-https"))]
            UpstreamProtocol::Https => {
                return Err(DomainError::UpstreamFailure(
                    "DNS-over-HTTPS support is not compiled in".to_string(),
                ))
            }
        };
        Self::new(transports, config.timeout())
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.transports.iter().map(Transport::endpoint).collect()
    }

    fn pick(&self) -> &Transport {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.transports.len();
        &self.transports[index]
    }
}

#[async_trait]
impl UpstreamResolverPort for UpstreamResolver {
    async fn resolve(&self, query: &[u8]) -> Result<Bytes, DomainError> {
        let transport = self.pick();
        let response = transport.send(query, self.timeout).await?;
        let bytes = response.bytes;

        if bytes.len() < DNS_HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{}-byte reply from {}",
                bytes.len(),
                transport.endpoint()
            )));
        }
        if transaction_id(&bytes) != transaction_id(query) {
            return Err(DomainError::InvalidDnsResponse(format!(
                "transaction id mismatch from {}",
                transport.endpoint()
            )));
        }

        debug!(
            upstream = %transport.endpoint(),
            protocol = response.protocol_used,
            bytes = bytes.len(),
            "Upstream answered"
        );
        Ok(bytes)
    }
}
