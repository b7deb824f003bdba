use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use compact_str::CompactString;
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use tracing::{debug, info};

use pagegate_application::ports::{CacheStatsSnapshot, ResolutionCachePort};

struct CacheEntry {
    addresses: Arc<Vec<IpAddr>>,
    inserted_at: Instant,
}

/// Bounded, TTL-expiring hostname resolution cache.
///
/// LRU-bounded: when over capacity the least-recently-accessed entry goes
/// first, regardless of remaining TTL. Expired entries are dropped lazily on
/// access and count as misses. Only successful resolutions are inserted, so
/// presence implies a past successful resolution.
pub struct ResolutionCache {
    entries: Mutex<LruCache<CompactString, CacheEntry, FxBuildHasher>>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    insertions: AtomicU64,
    evictions: AtomicU64,
}

impl ResolutionCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries.max(1)).unwrap();

        info!(
            max_entries = capacity.get(),
            ttl_secs = ttl.as_secs(),
            "Initializing resolution cache"
        );

        Self {
            entries: Mutex::new(LruCache::with_hasher(capacity, FxBuildHasher)),
            ttl,
            max_entries: capacity.get(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            insertions: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }
}

impl ResolutionCachePort for ResolutionCache {
    fn get(&self, host: &str) -> Option<Arc<Vec<IpAddr>>> {
        let key = CompactString::from(host.to_ascii_lowercase());
        let mut entries = self.entries.lock().unwrap();

        if let Some(entry) = entries.get(&key) {
            if entry.inserted_at.elapsed() < self.ttl {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(Arc::clone(&entry.addresses));
            }
            entries.pop(&key);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn insert(&self, host: &str, addresses: Vec<IpAddr>) {
        let key = CompactString::from(host.to_ascii_lowercase());
        let entry = CacheEntry {
            addresses: Arc::new(addresses),
            inserted_at: Instant::now(),
        };

        let mut entries = self.entries.lock().unwrap();
        let evicted = entries.push(key.clone(), entry);
        drop(entries);

        self.insertions.fetch_add(1, Ordering::Relaxed);
        if let Some((evicted_key, _)) = evicted {
            // push returns the displaced LRU victim, or the superseded value
            // under the same key; only the former is an eviction.
            if evicted_key != key {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(host = %evicted_key, "Evicted least-recently-used entry");
            }
        }
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
        info!("Resolution cache cleared");
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn stats(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            size: self.len(),
            max_entries: self.max_entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            insertions: self.insertions.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}
