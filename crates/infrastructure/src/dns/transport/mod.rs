#[cfg(feature = "dns-over-https")]
pub mod https;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use nullroute_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Raw answer returned by a transport, exactly as received.
#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,
    pub protocol_used: &'static str,
}

/// Sends one raw DNS message and waits for one raw answer.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Enum-dispatched transport, avoiding a boxed trait object on the hot path.
pub enum Transport {
    Udp(udp::UdpTransport),
    #[cfg(feature = "dns-over-https")]
    Https(https::HttpsTransport),
}

impl Transport {
    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::Udp(udp::UdpTransport::new(server_addr))
    }

    #[cfg(feature = "dns-over-https")]
    pub fn https(url: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::Https(https::HttpsTransport::new(url.into())?))
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            #[cfg(feature = "dns-over-https")]
            Self::Https(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    /// Human-readable upstream identity for logs.
    pub fn endpoint(&self) -> String {
        match self {
            Self::Udp(t) => t.server_addr().to_string(),
            #[cfg(feature = "dns-over-https")]
            Self::Https(t) => t.url().to_string(),
        }
    }
}
