use serde::{Deserialize, Serialize};

/// DNS listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Upper bound on datagrams handled concurrently.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

impl ServerConfig {
    pub fn dns_bind(&self) -> String {
        format!("{}:{}", self.bind_address, self.dns_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_max_in_flight() -> usize {
    512
}
