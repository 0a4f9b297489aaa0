use arc_swap::ArcSwap;
use nullroute_application::ports::{RuleCounts, RuleStorePort};
use nullroute_domain::{classify, FilterDecision, RuleSet};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// One immutable view of both lists. Readers hold it for the duration of a
/// single classification.
#[derive(Debug, Default)]
struct RuleSnapshot {
    blocked: Arc<RuleSet>,
    whitelist: Arc<RuleSet>,
}

/// Rule store backed by an atomically swapped snapshot.
///
/// `classify` is a lock-free `ArcSwap::load`. Writers build a complete new
/// snapshot off to the side and publish it with one pointer store, so a
/// reader sees either the old rules or the new ones, never a mix. Writers are
/// serialized by `write_lock` so two concurrent `add` calls cannot drop each
/// other's entry.
pub struct InMemoryRuleStore {
    snapshot: ArcSwap<RuleSnapshot>,
    write_lock: Mutex<()>,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(RuleSnapshot::default()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_rules(blocked: RuleSet, whitelist: RuleSet) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(RuleSnapshot {
                blocked: Arc::new(blocked),
                whitelist: Arc::new(whitelist),
            }),
            write_lock: Mutex::new(()),
        }
    }

    fn writer(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy-on-write edit of the blocklist.
    fn edit_blocked<F>(&self, edit: F) -> bool
    where
        F: FnOnce(&mut RuleSet) -> bool,
    {
        let _guard = self.writer();
        let current = self.snapshot.load_full();

        let mut blocked = RuleSet::clone(&current.blocked);
        if !edit(&mut blocked) {
            return false;
        }

        self.snapshot.store(Arc::new(RuleSnapshot {
            blocked: Arc::new(blocked),
            whitelist: Arc::clone(&current.whitelist),
        }));
        true
    }
}

impl Default for InMemoryRuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStorePort for InMemoryRuleStore {
    #[inline]
    fn classify(&self, domain: &str) -> FilterDecision {
        let snapshot = self.snapshot.load();
        classify(domain, &snapshot.blocked, &snapshot.whitelist)
    }

    fn reload(&self, rules: RuleSet) {
        let _guard = self.writer();
        let current = self.snapshot.load_full();
        let count = rules.len();

        self.snapshot.store(Arc::new(RuleSnapshot {
            blocked: Arc::new(rules),
            whitelist: Arc::clone(&current.whitelist),
        }));
        debug!(blocked = count, "Blocklist snapshot swapped");
    }

    fn add(&self, domain: &str) -> bool {
        self.edit_blocked(|rules| rules.insert(domain))
    }

    fn remove(&self, domain: &str) -> bool {
        self.edit_blocked(|rules| rules.remove(domain))
    }

    fn set_whitelist(&self, whitelist: RuleSet) {
        let _guard = self.writer();
        let current = self.snapshot.load_full();
        let count = whitelist.len();

        self.snapshot.store(Arc::new(RuleSnapshot {
            blocked: Arc::clone(&current.blocked),
            whitelist: Arc::new(whitelist),
        }));
        debug!(whitelisted = count, "Whitelist snapshot swapped");
    }

    fn replace(&self, blocked: RuleSet, whitelist: RuleSet) {
        let _guard = self.writer();
        let (blocked_count, whitelisted) = (blocked.len(), whitelist.len());

        self.snapshot.store(Arc::new(RuleSnapshot {
            blocked: Arc::new(blocked),
            whitelist: Arc::new(whitelist),
        }));
        debug!(blocked = blocked_count, whitelisted, "Rule snapshot swapped");
    }

    fn snapshot_counts(&self) -> RuleCounts {
        let snapshot = self.snapshot.load();
        RuleCounts {
            blocked: snapshot.blocked.len(),
            whitelisted: snapshot.whitelist.len(),
        }
    }
}
