use nullroute_domain::Statistics;
use std::sync::Arc;

use crate::services::QueryStatsCollector;

pub struct GetStatisticsUseCase {
    stats: Arc<QueryStatsCollector>,
}

impl GetStatisticsUseCase {
    pub fn new(stats: Arc<QueryStatsCollector>) -> Self {
        Self { stats }
    }

    pub fn execute(&self) -> Statistics {
        self.stats.snapshot()
    }
}
