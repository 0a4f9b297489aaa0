use serde::{Deserialize, Serialize};

/// Aggregate query counters for the life of the engine (or until reset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_queries: u64,
    pub queries_blocked: u64,
    pub queries_allowed: u64,
    pub cache_hits: u64,
}

impl Statistics {
    /// Percentage of queries that were blocked, 0 when nothing was counted.
    pub fn block_rate(&self) -> f64 {
        if self.total_queries == 0 {
            return 0.0;
        }
        self.queries_blocked as f64 / self.total_queries as f64 * 100.0
    }

    /// Flat key/value form handed to the host for `getStatistics`.
    pub fn to_flat_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::with_capacity(5);
        map.insert("totalQueries".into(), self.total_queries.into());
        map.insert("queriesBlocked".into(), self.queries_blocked.into());
        map.insert("queriesAllowed".into(), self.queries_allowed.into());
        map.insert("cacheHits".into(), self.cache_hits.into());
        map.insert("blockRate".into(), self.block_rate().into());
        map
    }
}
