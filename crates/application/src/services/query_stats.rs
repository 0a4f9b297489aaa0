use nullroute_domain::Statistics;
use std::sync::atomic::{AtomicU64, Ordering};

/// Running query counters.
///
/// Every handled query bumps `total` and exactly one of the disposition
/// counters, so `total = hits + blocked + allowed` holds between resets.
/// Counters are independent relaxed atomics; a snapshot taken while queries
/// are in flight may be off by the queries still being counted.
#[derive(Debug, Default)]
pub struct QueryStatsCollector {
    total: AtomicU64,
    blocked: AtomicU64,
    allowed: AtomicU64,
    cache_hits: AtomicU64,
}

impl QueryStatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_cache_hit(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_blocked(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.blocked.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_allowed(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.allowed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Statistics {
        Statistics {
            total_queries: self.total.load(Ordering::Relaxed),
            queries_blocked: self.blocked.load(Ordering::Relaxed),
            queries_allowed: self.allowed.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.total.store(0, Ordering::Relaxed);
        self.blocked.store(0, Ordering::Relaxed);
        self.allowed.store(0, Ordering::Relaxed);
        self.cache_hits.store(0, Ordering::Relaxed);
    }
}
