use nullroute_domain::{DomainError, RuleSet, DEFAULT_BLOCKED_DOMAINS};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{ResponseCachePort, RuleCounts, RuleSourcePort, RuleStorePort};

/// Rebuild the rule store from the persisted sources.
///
/// Both lists are read before anything is applied, so a read failure leaves
/// the live rules untouched. With no persisted blocklist the built-in seed
/// list is used; with no persisted whitelist the current one is kept.
pub struct ReloadRulesUseCase {
    source: Arc<dyn RuleSourcePort>,
    store: Arc<dyn RuleStorePort>,
    cache: Arc<dyn ResponseCachePort>,
}

impl ReloadRulesUseCase {
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

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<RuleCounts, DomainError> {
        let blocklist = self.source.load_blocklist().await?;
        let whitelist = self.source.load_whitelist().await?;

        let seeded = blocklist.is_none();
        let rules = match blocklist {
            Some(entries) => RuleSet::from_entries(entries),
            None => RuleSet::from_entries(DEFAULT_BLOCKED_DOMAINS.iter().copied()),
        };
        match whitelist {
            Some(document) => self
                .store
                .replace(rules, RuleSet::from_entries(document.domains)),
            None => self.store.reload(rules),
        }

        // Answers cached before the reload may belong to newly blocked names.
        self.cache.clear();

        let counts = self.store.snapshot_counts();
        info!(
            blocked = counts.blocked,
            whitelisted = counts.whitelisted,
            seeded,
            "Rules reloaded"
        );
        Ok(counts)
    }
}
