use bytes::Bytes;

/// Application-layer port for the Response Cache.
///
/// Maps a domain to the wire-format answer last resolved for it. Expired
/// entries are never returned; implementations bound the number of entries.
pub trait ResponseCachePort: Send + Sync {
    /// Fresh answer for `domain`, if any. Stale entries are dropped on read.
    fn get(&self, domain: &str) -> Option<Bytes>;

    /// Store `response` for `domain`, evicting the oldest insertion when full.
    fn set(&self, domain: &str, response: Bytes);

    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
