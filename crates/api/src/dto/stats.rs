use nullroute_domain::Statistics;
use serde::Serialize;

/// Same flat shape the `getStatistics` command replies with.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_queries: u64,
    pub queries_blocked: u64,
    pub queries_allowed: u64,
    pub cache_hits: u64,
    pub block_rate: f64,
}

impl From<Statistics> for StatsResponse {
    fn from(stats: Statistics) -> Self {
        Self {
            total_queries: stats.total_queries,
            queries_blocked: stats.queries_blocked,
            queries_allowed: stats.queries_allowed,
            cache_hits: stats.cache_hits,
            block_rate: stats.block_rate(),
        }
    }
}
