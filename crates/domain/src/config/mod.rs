//! Configuration module for Nullroute
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loading and CLI overrides
//! - `server`: DNS listener binding and concurrency
//! - `control`: Host command surface binding
//! - `upstream`: Upstream resolver protocol and targets
//! - `cache`: Response cache sizing
//! - `rules`: Persisted rule source locations
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod control;
pub mod errors;
pub mod logging;
pub mod root;
pub mod rules;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use control::ControlConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use rules::RulesConfig;
pub use server::ServerConfig;
pub use upstream::{UpstreamConfig, UpstreamProtocol};
