use std::net::IpAddr;
use std::sync::Arc;

/// Snapshot of resolution cache metrics for API exposure.
#[derive(Debug, Clone)]
pub struct CacheStatsSnapshot {
    pub size: usize,
    pub max_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}

/// Port for the hostname resolution cache.
///
/// Keys are hostnames; implementations normalize case (DNS is
/// case-insensitive) and must be safe under concurrent access. Only
/// successful resolutions are ever stored.
pub trait ResolutionCachePort: Send + Sync {
    /// Cached addresses for a hostname, or `None` on miss/expiry.
    fn get(&self, host: &str) -> Option<Arc<Vec<IpAddr>>>;

    /// Store a successful resolution, superseding any existing entry.
    fn insert(&self, host: &str, addresses: Vec<IpAddr>);

    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStatsSnapshot;
}
