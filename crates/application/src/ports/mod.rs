pub mod response_cache;
pub mod rule_source;
pub mod rule_store;
pub mod upstream_resolver;

pub use response_cache::ResponseCachePort;
pub use rule_source::RuleSourcePort;
pub use rule_store::{RuleCounts, RuleStorePort};
pub use upstream_resolver::UpstreamResolverPort;
