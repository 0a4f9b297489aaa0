use nullroute_domain::domain_name::{
    normalize_domain, normalize_name, parent_domains, wildcard_base,
};
use nullroute_domain::suffix_trie::SuffixTrie;
use nullroute_domain::{RuleSet, DEFAULT_BLOCKED_DOMAINS};

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(normalize_domain("  Ads.Example.COM \n"), "ads.example.com");
}

#[test]
fn test_normalize_strips_scheme_path_port_and_root_dot() {
    assert_eq!(
        normalize_domain("https://Tracker.net:443/pixel.gif"),
        "tracker.net"
    );
    assert_eq!(normalize_domain("example.com."), "example.com");
    assert_eq!(normalize_domain("example.com:8080"), "example.com");
}

#[test]
fn test_normalize_name_only_trims_lowercases_and_drops_root_dot() {
    assert_eq!(normalize_name("  Ads.Example.COM. "), "ads.example.com");
    assert_eq!(normalize_name("x/y.doubleclick.net"), "x/y.doubleclick.net");
    assert_eq!(normalize_name("host:53.example.com"), "host:53.example.com");
    assert_eq!(normalize_name("a://b.example.com"), "a://b.example.com");
}

#[test]
fn test_normalize_keeps_wildcard_prefix() {
    assert_eq!(normalize_domain("*.Example.com"), "*.example.com");
}

#[test]
fn test_parent_domains_most_specific_first() {
    let parents: Vec<&str> = parent_domains("a.b.c.com").collect();
    assert_eq!(parents, vec!["b.c.com", "c.com", "com"]);
}

#[test]
fn test_parent_domains_single_label_yields_nothing() {
    assert_eq!(parent_domains("localhost").count(), 0);
}

#[test]
fn test_wildcard_base() {
    assert_eq!(wildcard_base("*.ads.com"), Some("ads.com"));
    assert_eq!(wildcard_base("ads.com"), None);
    assert_eq!(wildcard_base("*."), None);
}

// ============================================================================
// Suffix trie
// ============================================================================

#[test]
fn test_trie_insert_and_match() {
    let mut trie = SuffixTrie::new();
    assert!(trie.insert("ads.com"));
    assert!(!trie.insert("ads.com"));
    assert_eq!(trie.len(), 1);

    assert!(trie.matches("ads.com"));
    assert!(trie.matches("x.ads.com"));
    assert!(!trie.matches("com"));
    assert!(!trie.matches("bads.com"));
}

#[test]
fn test_trie_remove_prunes_and_keeps_siblings() {
    let mut trie = SuffixTrie::new();
    trie.insert("ads.com");
    trie.insert("x.ads.com");

    assert!(trie.remove("ads.com"));
    assert!(!trie.remove("ads.com"));
    assert_eq!(trie.len(), 1);

    assert!(!trie.matches("y.ads.com"));
    assert!(trie.matches("deep.x.ads.com"));

    assert!(trie.remove("x.ads.com"));
    assert!(trie.is_empty());
    assert!(!trie.matches("x.ads.com"));
}

// ============================================================================
// RuleSet
// ============================================================================

#[test]
fn test_rule_set_counts_exact_and_wildcard_entries() {
    let set = RuleSet::from_entries(["a.com", "b.com", "*.c.com", "A.COM"]);
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
}

#[test]
fn test_rule_set_ignores_empty_and_bare_wildcards() {
    let mut set = RuleSet::new();
    assert!(!set.insert(""));
    assert!(!set.insert("   "));
    assert!(!set.insert("*."));
    assert!(!set.insert("*"));
    assert!(set.is_empty());
}

#[test]
fn test_rule_set_add_then_remove() {
    let mut set = RuleSet::new();
    assert!(set.insert("tracker.io"));
    assert!(set.matches("cdn.tracker.io"));

    assert!(set.remove("TRACKER.io"));
    assert!(!set.matches("cdn.tracker.io"));
    assert!(!set.remove("tracker.io"));
}

#[test]
fn test_rule_set_remove_wildcard_leaves_exact() {
    let mut set = RuleSet::from_entries(["ads.net", "*.ads.net"]);
    assert!(set.remove("*.ads.net"));

    assert!(set.contains_exact("ads.net"));
    assert!(!set.matches_wildcard("x.ads.net"));
    // parent-domain rule still covers subdomains through the exact entry
    assert!(set.contains_parent("x.ads.net"));
}

#[test]
fn test_default_seed_list_is_well_formed() {
    let set = RuleSet::from_entries(DEFAULT_BLOCKED_DOMAINS);
    assert_eq!(set.len(), DEFAULT_BLOCKED_DOMAINS.len());
    assert!(set.matches("doubleclick.net"));
    assert!(set.matches("stats.g.doubleclick.net"));
    assert!(DEFAULT_BLOCKED_DOMAINS.iter().any(|d| d.starts_with("*.")));
}
