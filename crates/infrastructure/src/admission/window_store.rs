use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, info};

use pagegate_application::ports::{
    AdmissionDecision, AdmissionStatsSnapshot, AdmissionStorePort,
};

/// Per-caller sliding-window request store.
///
/// Each identity maps to the ascending list of its in-window request
/// timestamps. The window is trimmed lazily on every access (and the trim is
/// kept even on denial, bounding memory); there is no background sweep.
/// DashMap's entry lock serializes updates per identity, so two racing
/// callers cannot both take the last slot, while distinct identities land on
/// different shards and do not contend.
pub struct SlidingWindowStore {
    windows: DashMap<String, Vec<u64>, FxBuildHasher>,
    max_requests: usize,
    window_ms: u64,
    max_identities: usize,
    allowed: AtomicU64,
    denied: AtomicU64,
    evictions: AtomicU64,
}

impl SlidingWindowStore {
    pub fn new(max_requests: u32, window_ms: u64, max_identities: usize) -> Self {
        info!(
            max_requests,
            window_ms, max_identities, "Initializing admission store"
        );

        Self {
            windows: DashMap::with_hasher(FxBuildHasher),
            max_requests: max_requests as usize,
            window_ms,
            max_identities: max_identities.max(1),
            allowed: AtomicU64::new(0),
            denied: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Evict the identity whose most recent request is oldest. Runs outside
    /// any entry lock to avoid holding two shard locks at once.
    fn evict_stalest(&self, keep: &str) {
        let mut victim: Option<(String, u64)> = None;

        for entry in self.windows.iter() {
            if entry.key() == keep {
                continue;
            }
            let last_seen = entry.value().last().copied().unwrap_or(0);
            match &victim {
                Some((_, best)) if *best <= last_seen => {}
                _ => victim = Some((entry.key().clone(), last_seen)),
            }
        }

        if let Some((identity, _)) = victim {
            self.windows.remove(&identity);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(identity = %identity, "Evicted stalest tracked identity");
        }
    }
}

impl AdmissionStorePort for SlidingWindowStore {
    fn admit(&self, identity: &str, now_ms: u64) -> AdmissionDecision {
        let window_start = now_ms.saturating_sub(self.window_ms);

        let decision = {
            let mut entry = self.windows.entry(identity.to_string()).or_default();
            let timestamps = entry.value_mut();

            // Lazy sliding-window trim, persisted even when we go on to deny.
            timestamps.retain(|&t| t > window_start);

            if timestamps.len() >= self.max_requests {
                // Timestamps are appended in order, so the first one is the
                // oldest still inside the window.
                let oldest = timestamps.first().copied().unwrap_or(now_ms);
                let retry_after_ms = (oldest + self.window_ms).saturating_sub(now_ms);
                AdmissionDecision::denied(retry_after_ms.div_ceil(1000).max(1))
            } else {
                timestamps.push(now_ms);
                AdmissionDecision::allowed()
            }
        };

        if decision.allowed {
            self.allowed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.denied.fetch_add(1, Ordering::Relaxed);
        }

        if self.windows.len() > self.max_identities {
            self.evict_stalest(identity);
        }

        decision
    }

    fn clear(&self) {
        self.windows.clear();
        info!("Admission store cleared");
    }

    fn len(&self) -> usize {
        self.windows.len()
    }

    fn stats(&self) -> AdmissionStatsSnapshot {
        AdmissionStatsSnapshot {
            tracked_identities: self.windows.len(),
            max_identities: self.max_identities,
            allowed: self.allowed.load(Ordering::Relaxed),
            denied: self.denied.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}
