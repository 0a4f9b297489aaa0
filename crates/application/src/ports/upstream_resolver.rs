use async_trait::async_trait;
use bytes::Bytes;
use nullroute_domain::DomainError;

/// Application-layer port for the Upstream Resolver.
///
/// Forwards a raw query datagram and returns the raw answer unmodified.
/// Implementations bound the call with a timeout and never retry; retry
/// policy belongs to the caller.
#[async_trait]
pub trait UpstreamResolverPort: Send + Sync {
    async fn resolve(&self, query: &[u8]) -> Result<Bytes, DomainError>;
}
