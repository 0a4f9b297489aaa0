use super::{
    CacheConfig, ConfigError, ControlConfig, LoggingConfig, RulesConfig, ServerConfig,
    UpstreamConfig, UpstreamProtocol,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration, loaded from TOML with every section optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub control: ControlConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `config_path` (defaults when `None`) and apply overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::InvalidPort("server.dns_port must be > 0".into()));
        }
        if self.control.enabled && self.control.port == 0 {
            return Err(ConfigError::InvalidPort("control.port must be > 0".into()));
        }
        if self.server.max_in_flight == 0 {
            return Err(ConfigError::Validation("server.max_in_flight must be > 0".into()));
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation("cache.ttl_secs must be > 0".into()));
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation("cache.max_entries must be > 0".into()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("logging.level cannot be empty".into()));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation("upstream.timeout_ms must be > 0".into()));
        }

        match self.upstream.protocol {
            UpstreamProtocol::Udp => {
                if self.upstream.servers.is_empty() {
                    return Err(ConfigError::Validation(
                        "upstream.servers cannot be empty for udp".into(),
                    ));
                }
                self.upstream
                    .server_addrs()
                    .map_err(ConfigError::InvalidUpstream)?;
            }
            UpstreamProtocol::Https => {
                if !self.upstream.doh_url.starts_with("https://") {
                    return Err(ConfigError::InvalidDohUrl(self.upstream.doh_url.clone()));
                }
            }
        }

        Ok(())
    }
}
