//! Domain Matcher: allow/block classification against a blocklist and a
//! whitelist.

use crate::domain_name::normalize_name;
use crate::rule_set::RuleSet;

/// The outcome of classifying one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Allowed,
    Blocked,
}

impl FilterDecision {
    pub fn is_blocked(self) -> bool {
        matches!(self, FilterDecision::Blocked)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterDecision::Allowed => "allowed",
            FilterDecision::Blocked => "blocked",
        }
    }
}

/// Classify a raw domain.
///
/// The whitelist is consulted first and wins outright; only then is the
/// blocklist checked. Each set is checked exact, then parent-domain
/// (most specific parent first), then wildcard. An empty domain is Allowed.
pub fn classify(domain: &str, blocklist: &RuleSet, whitelist: &RuleSet) -> FilterDecision {
    let domain = normalize_name(domain);
    if domain.is_empty() {
        return FilterDecision::Allowed;
    }

    if whitelist.matches(&domain) {
        return FilterDecision::Allowed;
    }

    if blocklist.matches(&domain) {
        FilterDecision::Blocked
    } else {
        FilterDecision::Allowed
    }
}
