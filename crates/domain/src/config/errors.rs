use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid upstream server address: {0}")]
    InvalidUpstream(String),

    #[error("Invalid DNS-over-HTTPS URL (must start with https://): {0}")]
    InvalidDohUrl(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
