//! Nullroute Domain Layer
pub mod command;
pub mod config;
pub mod default_rules;
pub mod domain_name;
pub mod errors;
pub mod matcher;
pub mod packet;
pub mod query;
pub mod rule_set;
pub mod statistics;
pub mod suffix_trie;
pub mod whitelist;

pub use command::{CommandReply, ControlCommand};
pub use config::{CliOverrides, Config, ConfigError};
pub use default_rules::DEFAULT_BLOCKED_DOMAINS;
pub use domain_name::{normalize_domain, normalize_name};
pub use errors::{DomainError, PacketError};
pub use matcher::{classify, FilterDecision};
pub use query::{ParsedQuery, QuestionKind};
pub use rule_set::RuleSet;
pub use statistics::Statistics;
pub use whitelist::WhitelistDocument;
