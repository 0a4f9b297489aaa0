//! Hostname normalization shared by every lookup key.
//!
//! Two entry points, one canonical form:
//! - [`normalize_name`] for queried names: trim, lowercase, drop the root dot.
//!   Nothing else is removed, since DNS labels may legally carry `/` or `:`.
//! - [`normalize_domain`] for host-supplied rule entries, which may arrive as
//!   URLs. It strips scheme, path and port, then applies [`normalize_name`].

use compact_str::CompactString;

/// Prefix that marks a wildcard entry (`*.example.com`).
pub const WILDCARD_PREFIX: &str = "*.";

/// Canonical lookup form of a queried name.
///
/// `"  Ads.Example.COM. "` → `"ads.example.com"`; `"0/25.2.0.192.in-addr.arpa"`
/// is kept whole.
pub fn normalize_name(raw: &str) -> CompactString {
    let s = raw.trim().trim_end_matches('.');
    let mut out = CompactString::with_capacity(s.len());
    out.extend(s.chars().flat_map(char::to_lowercase));
    out
}

/// Normalize a host-supplied rule entry into the canonical lookup form.
///
/// Drops a leading `scheme://`, anything from the first `/` on and a trailing
/// `:port`, then applies [`normalize_name`].
/// Examples:
/// - `"  Ads.Example.COM. "` → `"ads.example.com"`
/// - `"https://tracker.net:443/pixel"` → `"tracker.net"`
/// - `"*.Example.com"` → `"*.example.com"`
pub fn normalize_domain(raw: &str) -> CompactString {
    let mut s = raw.trim();

    if let Some(idx) = s.find("://") {
        s = &s[idx + 3..];
    }
    if let Some(idx) = s.find('/') {
        s = &s[..idx];
    }
    if let Some(idx) = s.rfind(':') {
        if s[idx + 1..].bytes().all(|b| b.is_ascii_digit()) {
            s = &s[..idx];
        }
    }
    normalize_name(s)
}

/// Iterate the strict parent domains of `domain`, most specific first.
///
/// `"a.b.c.com"` yields `"b.c.com"`, `"c.com"`, `"com"`. A single-label name
/// yields nothing.
pub fn parent_domains(domain: &str) -> ParentDomains<'_> {
    ParentDomains { rest: domain }
}

pub struct ParentDomains<'a> {
    rest: &'a str,
}

impl<'a> Iterator for ParentDomains<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.rest.find('.')?;
        self.rest = &self.rest[idx + 1..];
        if self.rest.is_empty() {
            return None;
        }
        Some(self.rest)
    }
}

/// Returns the base of a wildcard entry (`"*.ads.com"` → `Some("ads.com")`).
#[inline]
pub fn wildcard_base(entry: &str) -> Option<&str> {
    entry
        .strip_prefix(WILDCARD_PREFIX)
        .filter(|base| !base.is_empty())
}
