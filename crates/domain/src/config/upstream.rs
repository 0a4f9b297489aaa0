use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Wire protocol used to reach the upstream resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamProtocol {
    /// Plain DNS over UDP to `servers`, one server per query in rotation.
    #[default]
    Udp,
    /// DNS-over-HTTPS (RFC 8484) POST to `doh_url`.
    Https,
}

/// Upstream resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub protocol: UpstreamProtocol,

    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default = "default_doh_url")]
    pub doh_url: String,

    /// Per-query budget in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parse `servers`, accepting bare IPs (port 53 implied).
    pub fn server_addrs(&self) -> Result<Vec<SocketAddr>, String> {
        self.servers
            .iter()
            .map(|s| parse_server_addr(s).ok_or_else(|| s.clone()))
            .collect()
    }
}

fn parse_server_addr(s: &str) -> Option<SocketAddr> {
    let s = s.trim();
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Some(addr);
    }
    s.parse::<std::net::IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, 53))
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            protocol: UpstreamProtocol::Udp,
            servers: default_servers(),
            doh_url: default_doh_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_servers() -> Vec<String> {
    vec!["1.1.1.1:53".to_string(), "1.0.0.1:53".to_string()]
}

fn default_doh_url() -> String {
    "https://cloudflare-dns.com/dns-query".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}
