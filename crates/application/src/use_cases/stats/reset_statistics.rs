use std::sync::Arc;
use tracing::info;

use crate::services::QueryStatsCollector;

pub struct ResetStatisticsUseCase {
    stats: Arc<QueryStatsCollector>,
}

impl ResetStatisticsUseCase {
    pub fn new(stats: Arc<QueryStatsCollector>) -> Self {
        Self { stats }
    }

    pub fn execute(&self) {
        self.stats.reset();
        info!("Statistics reset");
    }
}
