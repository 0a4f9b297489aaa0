use super::clock::{Clock, SystemClock};
use super::metrics::CacheMetrics;
use bytes::Bytes;
use nullroute_application::ports::ResponseCachePort;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::debug;

/// Insertion stamp. The sequence number breaks ties between entries stored
/// within the same clock tick, so eviction follows insertion order exactly.
type Stamp = (Duration, u64);

struct Entry {
    response: Bytes,
    stamp: Stamp,
}

#[derive(Default)]
struct Inner {
    entries: FxHashMap<Arc<str>, Entry>,
    /// Insertion order index; the first key is the eviction victim.
    order: BTreeMap<Stamp, Arc<str>>,
    next_seq: u64,
}

impl Inner {
    fn remove(&mut self, domain: &str) -> Option<Entry> {
        let entry = self.entries.remove(domain)?;
        self.order.remove(&entry.stamp);
        Some(entry)
    }

    fn evict_oldest(&mut self) -> Option<Arc<str>> {
        let (_, victim) = self.order.pop_first()?;
        self.entries.remove(&victim);
        Some(victim)
    }
}

/// Bounded TTL response cache keyed by domain.
///
/// A single `RwLock` guards both the entry map and the insertion-order
/// index so the entry count and the index never disagree. Fresh hits take
/// the read lock only; expired entries are removed lazily under the write
/// lock on the read that finds them.
pub struct ResponseCache {
    inner: RwLock<Inner>,
    ttl: Duration,
    capacity: usize,
    clock: Arc<dyn Clock>,
    metrics: CacheMetrics,
}

impl ResponseCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self::with_clock(ttl, capacity, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            ttl,
            capacity,
            clock,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[inline]
    fn is_expired(&self, stamp: Stamp, now: Duration) -> bool {
        now.saturating_sub(stamp.0) > self.ttl
    }

    fn expire(&self, domain: &str) {
        let now = self.clock.now();
        let mut inner = self.write();
        // Another writer may have refreshed the entry in between.
        let still_expired = inner
            .entries
            .get(domain)
            .is_some_and(|entry| self.is_expired(entry.stamp, now));
        if still_expired {
            inner.remove(domain);
            CacheMetrics::bump(&self.metrics.expirations);
            debug!(domain = %domain, "Cache entry expired");
        }
    }
}

impl ResponseCachePort for ResponseCache {
    fn get(&self, domain: &str) -> Option<Bytes> {
        let now = self.clock.now();
        {
            let inner = self.read();
            match inner.entries.get(domain) {
                None => {
                    CacheMetrics::bump(&self.metrics.misses);
                    return None;
                }
                Some(entry) if !self.is_expired(entry.stamp, now) => {
                    CacheMetrics::bump(&self.metrics.hits);
                    return Some(entry.response.clone());
                }
                Some(_) => {}
            }
        }

        self.expire(domain);
        CacheMetrics::bump(&self.metrics.misses);
        None
    }

    fn set(&self, domain: &str, response: Bytes) {
        if self.capacity == 0 {
            return;
        }

        let now = self.clock.now();
        let mut inner = self.write();

        let replaced = inner.remove(domain).is_some();
        if !replaced && inner.entries.len() >= self.capacity {
            if let Some(victim) = inner.evict_oldest() {
                CacheMetrics::bump(&self.metrics.evictions);
                debug!(domain = %victim, "Cache entry evicted");
            }
        }

        let key: Arc<str> = Arc::from(domain);
        let stamp = (now, inner.next_seq);
        inner.next_seq += 1;
        inner.order.insert(stamp, Arc::clone(&key));
        inner.entries.insert(key, Entry { response, stamp });
        CacheMetrics::bump(&self.metrics.insertions);
    }

    fn clear(&self) {
        let mut inner = self.write();
        inner.entries.clear();
        inner.order.clear();
    }

    fn len(&self) -> usize {
        self.read().entries.len()
    }
}
