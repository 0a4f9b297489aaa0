use nullroute_domain::{normalize_domain, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{ResponseCachePort, RuleStorePort};

/// Single-entry blocklist mutation.
pub struct EditBlocklistUseCase {
    store: Arc<dyn RuleStorePort>,
    cache: Arc<dyn ResponseCachePort>,
}

impl EditBlocklistUseCase {
    pub fn new(store: Arc<dyn RuleStorePort>, cache: Arc<dyn ResponseCachePort>) -> Self {
        Self { store, cache }
    }

    /// Returns whether the entry was newly added.
    #[instrument(skip(self))]
    pub fn add(&self, domain: &str) -> Result<bool, DomainError> {
        let entry = validated(domain)?;
        let added = self.store.add(&entry);
        if added {
            // A cached upstream answer would otherwise bypass the new rule.
            self.cache.clear();
            info!(domain = %entry, "Blocklist entry added");
        }
        Ok(added)
    }

    /// Returns whether the entry was present.
    #[instrument(skip(self))]
    pub fn remove(&self, domain: &str) -> Result<bool, DomainError> {
        let entry = validated(domain)?;
        let removed = self.store.remove(&entry);
        if removed {
            info!(domain = %entry, "Blocklist entry removed");
        }
        Ok(removed)
    }
}

fn validated(domain: &str) -> Result<String, DomainError> {
    let normalized = normalize_domain(domain);
    match normalized.as_str() {
        "" | "*" | "*." => Err(DomainError::InvalidDomainName(domain.to_string())),
        entry => Ok(entry.to_string()),
    }
}
