pub mod cache;
pub mod rule_store;
pub mod server;
pub mod transport;
pub mod upstream;

pub use cache::{CacheMetrics, Clock, ResponseCache, SystemClock};
pub use rule_store::InMemoryRuleStore;
pub use server::UdpDnsServer;
pub use upstream::UpstreamResolver;
