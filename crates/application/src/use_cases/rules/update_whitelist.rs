use nullroute_domain::{RuleSet, WhitelistDocument};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{ResponseCachePort, RuleSourcePort, RuleStorePort};

/// Replace the whitelist and persist it.
///
/// The in-memory swap always happens; a persistence failure is logged only.
/// The response cache is cleared, since a name dropped from the whitelist may
/// have a cached upstream answer.
pub struct UpdateWhitelistUseCase {
    source: Arc<dyn RuleSourcePort>,
    store: Arc<dyn RuleStorePort>,
    cache: Arc<dyn ResponseCachePort>,
}

impl UpdateWhitelistUseCase {
    pub fn new(
        source: Arc<dyn RuleSourcePort>,
        store: Arc<dyn RuleStorePort>,
        cache: Arc<dyn ResponseCachePort>,
    ) -> Self {
        Self {
            source,
            store,
            cache,
        }
    }

    #[instrument(skip(self, domains), fields(count = domains.len()))]
    pub async fn execute(&self, domains: Vec<String>) -> usize {
        self.store
            .set_whitelist(RuleSet::from_entries(domains.iter()));
        self.cache.clear();
        let whitelisted = self.store.snapshot_counts().whitelisted;

        let document = WhitelistDocument::new(domains);
        if let Err(e) = self.source.save_whitelist(&document).await {
            warn!(error = %e, "Failed to persist whitelist");
        }

        info!(whitelisted, "Whitelist updated");
        whitelisted
    }
}
