use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

/// A node in the reversed-label suffix trie.
#[derive(Default, Clone)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    /// Set when a wildcard entry terminates at this node.
    /// `*.ads.com` sets the flag at the "ads" node after traversing "com".
    wildcard: bool,
}

impl TrieNode {
    fn is_prunable(&self) -> bool {
        !self.wildcard && self.children.is_empty()
    }
}

/// Suffix trie for wildcard domain matching.
///
/// Entries like `*.ads.com` are stored as reversed label paths:
/// `*.ads.com` → traverse ["com", "ads"], mark the "ads" node.
///
/// Lookup for `sub.ads.com`:
///   Reversed labels: ["com", "ads", "sub"]
///   Walk: root → "com" → "ads" (marked → match)
///
/// A marked node matches the base domain itself as well as every name below
/// it, so `*.ads.com` covers both `ads.com` and `x.y.ads.com`.
#[derive(Default, Clone)]
pub struct SuffixTrie {
    root: TrieNode,
    len: usize,
}

impl SuffixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct wildcard bases stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Mark `base` (already stripped of `*.`). Returns false if it was present.
    pub fn insert(&mut self, base: &str) -> bool {
        let mut node = &mut self.root;
        for label in base.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        if node.wildcard {
            return false;
        }
        node.wildcard = true;
        self.len += 1;
        true
    }

    /// Unmark `base` and prune nodes left without purpose.
    /// Returns false if it was not present.
    pub fn remove(&mut self, base: &str) -> bool {
        let labels: SmallVec<[&str; 8]> = base.split('.').rev().collect();
        let removed = Self::remove_in(&mut self.root, &labels);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_in(node: &mut TrieNode, labels: &[&str]) -> bool {
        let Some((first, rest)) = labels.split_first() else {
            let was_set = node.wildcard;
            node.wildcard = false;
            return was_set;
        };

        let Some(child) = node.children.get_mut(*first) else {
            return false;
        };
        let removed = Self::remove_in(child, rest);
        if removed && child.is_prunable() {
            node.children.remove(*first);
        }
        removed
    }

    /// Returns true if `domain` equals or sits below any stored wildcard base.
    #[inline]
    pub fn matches(&self, domain: &str) -> bool {
        let mut node = &self.root;
        for label in domain.split('.').rev() {
            match node.children.get(label) {
                Some(child) => {
                    if child.wildcard {
                        return true;
                    }
                    node = child;
                }
                None => return false,
            }
        }
        false
    }
}
