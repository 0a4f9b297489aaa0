mod helpers;

use helpers::packets::query;
use helpers::{MockBehavior, MockDnsServer};
use nullroute_application::ports::UpstreamResolverPort;
use nullroute_domain::config::{UpstreamConfig, UpstreamProtocol};
use nullroute_domain::DomainError;
use nullroute_infrastructure::dns::transport::udp::UdpTransport;
use nullroute_infrastructure::dns::transport::{DnsTransport, Transport};
use nullroute_infrastructure::dns::UpstreamResolver;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(300);

fn resolver_for(servers: &[&MockDnsServer]) -> UpstreamResolver {
    let transports = servers.iter().map(|s| Transport::udp(s.addr())).collect();
    UpstreamResolver::new(transports, TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_udp_transport_round_trip() {
    let server = MockDnsServer::start(MockBehavior::Answer).await.unwrap();
    let transport = UdpTransport::new(server.addr());
    let packet = query(0x1234, "example.com");

    let response = transport.send(&packet, TIMEOUT).await.unwrap();

    assert_eq!(response.protocol_used, "UDP");
    assert_eq!(&response.bytes[..2], &[0x12, 0x34]);
    assert_eq!(
        response.bytes.as_ref(),
        MockDnsServer::build_mock_response(&packet).as_slice()
    );
}

#[tokio::test]
async fn test_resolver_returns_upstream_bytes_unmodified() {
    let server = MockDnsServer::start(MockBehavior::Answer).await.unwrap();
    let resolver = resolver_for(&[&server]);
    let packet = query(42, "example.com");

    let response = resolver.resolve(&packet).await.unwrap();

    assert_eq!(
        response.as_ref(),
        MockDnsServer::build_mock_response(&packet).as_slice()
    );
}

#[tokio::test]
async fn test_resolver_times_out_on_silent_upstream() {
    let server = MockDnsServer::start(MockBehavior::Silent).await.unwrap();
    let resolver = resolver_for(&[&server]);

    let started = std::time::Instant::now();
    let result = resolver.resolve(&query(1, "example.com")).await;

    assert!(matches!(result, Err(DomainError::QueryTimeout(300))));
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(server.query_count(), 1);
}

#[tokio::test]
async fn test_resolver_rejects_mismatched_transaction_id() {
    let server = MockDnsServer::start(MockBehavior::WrongId).await.unwrap();
    let resolver = resolver_for(&[&server]);

    let result = resolver.resolve(&query(7, "example.com")).await;

    assert!(matches!(result, Err(DomainError::InvalidDnsResponse(_))));
}

#[tokio::test]
async fn test_resolver_rejects_short_reply() {
    let server = MockDnsServer::start(MockBehavior::Truncated).await.unwrap();
    let resolver = resolver_for(&[&server]);

    let result = resolver.resolve(&query(7, "example.com")).await;

    assert!(matches!(result, Err(DomainError::InvalidDnsResponse(_))));
}

#[tokio::test]
async fn test_resolver_rotates_servers_without_retry() {
    let first = MockDnsServer::start(MockBehavior::Answer).await.unwrap();
    let second = MockDnsServer::start(MockBehavior::Silent).await.unwrap();
    let resolver = resolver_for(&[&first, &second]);

    assert!(resolver.resolve(&query(1, "a.test")).await.is_ok());
    assert!(resolver.resolve(&query(2, "b.test")).await.is_err());
    assert!(resolver.resolve(&query(3, "c.test")).await.is_ok());

    assert_eq!(first.query_count(), 2);
    assert_eq!(second.query_count(), 1);
}

#[test]
fn test_resolver_requires_a_transport() {
    assert!(UpstreamResolver::new(Vec::new(), TIMEOUT).is_err());
}

#[test]
fn test_from_config_builds_udp_pool() {
    let config = UpstreamConfig {
        servers: vec!["9.9.9.9".to_string(), "149.112.112.112:53".to_string()],
        ..UpstreamConfig::default()
    };

    let resolver = UpstreamResolver::from_config(&config).unwrap();

    assert_eq!(resolver.endpoints(), vec!["9.9.9.9:53", "149.112.112.112:53"]);
}

#[test]
fn test_from_config_rejects_bad_address() {
    let config = UpstreamConfig {
        servers: vec!["not-an-ip".to_string()],
        ..UpstreamConfig::default()
    };

    assert!(UpstreamResolver::from_config(&config).is_err());
}

#[test]
fn test_from_config_builds_doh_transport() {
    let config = UpstreamConfig {
        protocol: UpstreamProtocol::Https,
        ..UpstreamConfig::default()
    };

    let resolver = UpstreamResolver::from_config(&config).unwrap();

    assert_eq!(
        resolver.endpoints(),
        vec!["https://cloudflare-dns.com/dns-query"]
    );
}
