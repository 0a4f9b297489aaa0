pub mod clock;
pub mod metrics;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use metrics::CacheMetrics;
pub use store::ResponseCache;
