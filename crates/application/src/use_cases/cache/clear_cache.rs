use std::sync::Arc;
use tracing::info;

use crate::ports::ResponseCachePort;

pub struct ClearCacheUseCase {
    cache: Arc<dyn ResponseCachePort>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn ResponseCachePort>) -> Self {
        Self { cache }
    }

    /// Drop every cached answer. Returns how many were removed.
    pub fn execute(&self) -> usize {
        let removed = self.cache.len();
        self.cache.clear();
        info!(removed, "Response cache cleared");
        removed
    }
}
