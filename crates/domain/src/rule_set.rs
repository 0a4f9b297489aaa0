use crate::domain_name::{normalize_domain, parent_domains, wildcard_base};
use crate::suffix_trie::SuffixTrie;
use compact_str::CompactString;
use rustc_hash::FxHashSet;

/// A set of domain rules with exact, parent-domain and wildcard semantics.
///
/// Used for both the blocklist and the whitelist. Every entry is normalized
/// on the way in; entries prefixed with `*.` go to the wildcard trie, all
/// others to the exact set.
#[derive(Default, Clone)]
pub struct RuleSet {
    exact: FxHashSet<CompactString>,
    wildcard: SuffixTrie,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for entry in entries {
            set.insert(entry.as_ref());
        }
        set
    }

    /// Add a rule. Returns true if the set changed.
    ///
    /// Empty entries and a bare `*.` are ignored.
    pub fn insert(&mut self, entry: &str) -> bool {
        let entry = normalize_domain(entry);
        if entry.is_empty() {
            return false;
        }
        match wildcard_base(&entry) {
            Some(base) => self.wildcard.insert(base),
            None if entry.starts_with('*') => false,
            None => self.exact.insert(entry),
        }
    }

    /// Remove a rule. Returns true if the set changed.
    pub fn remove(&mut self, entry: &str) -> bool {
        let entry = normalize_domain(entry);
        match wildcard_base(&entry) {
            Some(base) => self.wildcard.remove(base),
            None => self.exact.remove(entry.as_str()),
        }
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.wildcard.is_empty()
    }

    /// Exact membership of an already-normalized domain.
    #[inline]
    pub fn contains_exact(&self, domain: &str) -> bool {
        self.exact.contains(domain)
    }

    /// True if any strict parent of `domain` is an exact entry.
    #[inline]
    pub fn contains_parent(&self, domain: &str) -> bool {
        parent_domains(domain).any(|parent| self.exact.contains(parent))
    }

    /// True if a wildcard entry covers `domain` or one of its parents.
    #[inline]
    pub fn matches_wildcard(&self, domain: &str) -> bool {
        self.wildcard.matches(domain)
    }

    /// Full rule check for an already-normalized domain: exact, then
    /// parent-domain walk, then wildcard.
    #[inline]
    pub fn matches(&self, domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }
        self.contains_exact(domain) || self.contains_parent(domain) || self.matches_wildcard(domain)
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("exact", &self.exact.len())
            .field("wildcard", &self.wildcard.len())
            .finish()
    }
}
