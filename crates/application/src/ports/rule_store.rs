use nullroute_domain::{FilterDecision, RuleSet};

/// Entry counts of the live rule snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleCounts {
    pub blocked: usize,
    pub whitelisted: usize,
}

/// Application-layer port for the Rule Store.
///
/// Owns the blocklist and the whitelist. `classify` is the hot path and is
/// synchronous: all state lives in memory. Readers must never observe a
/// partially applied `reload` or `set_whitelist`, and concurrent readers must
/// not block each other.
pub trait RuleStorePort: Send + Sync {
    /// Classify `domain` against the current snapshot, whitelist first.
    fn classify(&self, domain: &str) -> FilterDecision;

    /// Replace the blocklist wholesale.
    fn reload(&self, rules: RuleSet);

    /// Add one blocklist entry. Returns true if it was not present.
    fn add(&self, domain: &str) -> bool;

    /// Remove one blocklist entry. Returns true if it was present.
    fn remove(&self, domain: &str) -> bool;

    /// Replace the whitelist wholesale.
    fn set_whitelist(&self, whitelist: RuleSet);

    /// Replace both lists in one publish, so no reader pairs the new
    /// blocklist with the old whitelist.
    fn replace(&self, blocked: RuleSet, whitelist: RuleSet);

    fn snapshot_counts(&self) -> RuleCounts;
}
