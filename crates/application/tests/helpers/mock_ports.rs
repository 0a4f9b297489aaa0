use async_trait::async_trait;
use bytes::Bytes;
use nullroute_application::ports::{
    ResponseCachePort, RuleCounts, RuleSourcePort, RuleStorePort, UpstreamResolverPort,
};
use nullroute_domain::{classify, DomainError, FilterDecision, RuleSet, WhitelistDocument};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Mock RuleStore
// ============================================================================

#[derive(Default)]
pub struct MockRuleStore {
    blocked: Mutex<RuleSet>,
    whitelist: Mutex<RuleSet>,
    publishes: AtomicUsize,
}

impl MockRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocked(entries: &[&str]) -> Self {
        let store = Self::new();
        store.reload(RuleSet::from_entries(entries.iter().copied()));
        store.publishes.store(0, Ordering::SeqCst);
        store
    }

    /// Number of separate snapshot publishes (reload, edit, whitelist swap
    /// or combined replace) since construction.
    pub fn publish_count(&self) -> usize {
        self.publishes.load(Ordering::SeqCst)
    }

    fn published(&self) {
        self.publishes.fetch_add(1, Ordering::SeqCst);
    }
}

impl RuleStorePort for MockRuleStore {
    fn classify(&self, domain: &str) -> FilterDecision {
        let blocked = self.blocked.lock().unwrap();
        let whitelist = self.whitelist.lock().unwrap();
        classify(domain, &blocked, &whitelist)
    }

    fn reload(&self, rules: RuleSet) {
        *self.blocked.lock().unwrap() = rules;
        self.published();
    }

    fn add(&self, domain: &str) -> bool {
        self.published();
        self.blocked.lock().unwrap().insert(domain)
    }

    fn remove(&self, domain: &str) -> bool {
        self.published();
        self.blocked.lock().unwrap().remove(domain)
    }

    fn set_whitelist(&self, whitelist: RuleSet) {
        *self.whitelist.lock().unwrap() = whitelist;
        self.published();
    }

    fn replace(&self, blocked: RuleSet, whitelist: RuleSet) {
        let mut current_blocked = self.blocked.lock().unwrap();
        let mut current_whitelist = self.whitelist.lock().unwrap();
        *current_blocked = blocked;
        *current_whitelist = whitelist;
        self.published();
    }

    fn snapshot_counts(&self) -> RuleCounts {
        RuleCounts {
            blocked: self.blocked.lock().unwrap().len(),
            whitelisted: self.whitelist.lock().unwrap().len(),
        }
    }
}

// ============================================================================
// Mock ResponseCache
// ============================================================================

#[derive(Default)]
pub struct MockResponseCache {
    entries: Mutex<HashMap<String, Bytes>>,
    clears: AtomicUsize,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self, domain: &str) -> Option<Bytes> {
        self.entries.lock().unwrap().get(domain).cloned()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl ResponseCachePort for MockResponseCache {
    fn get(&self, domain: &str) -> Option<Bytes> {
        self.entries.lock().unwrap().get(domain).cloned()
    }

    fn set(&self, domain: &str, response: Bytes) {
        self.entries
            .lock()
            .unwrap()
            .insert(domain.to_string(), response);
    }

    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().clear();
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

// ============================================================================
// Mock UpstreamResolver
// ============================================================================

/// Echoes a canned answer built from the query, or fails on demand.
#[derive(Default)]
pub struct MockUpstreamResolver {
    should_fail: AtomicBool,
    calls: AtomicUsize,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let resolver = Self::new();
        resolver.set_should_fail(true);
        resolver
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolverPort for MockUpstreamResolver {
    async fn resolve(&self, query: &[u8]) -> Result<Bytes, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::QueryTimeout(10));
        }
        Ok(super::packets::answer_for(query))
    }
}

// ============================================================================
// Mock RuleSource
// ============================================================================

#[derive(Default)]
pub struct MockRuleSource {
    blocklist: Mutex<Option<Vec<String>>>,
    whitelist: Mutex<Option<WhitelistDocument>>,
    saved: Mutex<Vec<WhitelistDocument>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MockRuleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocklist(entries: &[&str]) -> Self {
        let source = Self::new();
        *source.blocklist.lock().unwrap() =
            Some(entries.iter().map(|s| s.to_string()).collect());
        source
    }

    pub fn set_whitelist(&self, domains: &[&str]) {
        *self.whitelist.lock().unwrap() = Some(WhitelistDocument::new(
            domains.iter().map(|s| s.to_string()).collect(),
        ));
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<WhitelistDocument> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl RuleSourcePort for MockRuleSource {
    async fn load_blocklist(&self) -> Result<Option<Vec<String>>, DomainError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(DomainError::RuleSource("mock load failure".to_string()));
        }
        Ok(self.blocklist.lock().unwrap().clone())
    }

    async fn load_whitelist(&self) -> Result<Option<WhitelistDocument>, DomainError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(DomainError::RuleSource("mock load failure".to_string()));
        }
        Ok(self.whitelist.lock().unwrap().clone())
    }

    async fn save_whitelist(&self, document: &WhitelistDocument) -> Result<(), DomainError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("mock save failure".to_string()));
        }
        self.saved.lock().unwrap().push(document.clone());
        Ok(())
    }
}
