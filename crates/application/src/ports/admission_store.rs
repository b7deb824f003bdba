/// Outcome of an admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionDecision {
    pub allowed: bool,
    /// Present only on denial: whole seconds until the oldest in-window
    /// request leaves the window.
    pub retry_after_secs: Option<u64>,
}

impl AdmissionDecision {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            retry_after_secs: None,
        }
    }

    pub fn denied(retry_after_secs: u64) -> Self {
        Self {
            allowed: false,
            retry_after_secs: Some(retry_after_secs),
        }
    }
}

/// Snapshot of admission store metrics for API exposure.
#[derive(Debug, Clone)]
pub struct AdmissionStatsSnapshot {
    pub tracked_identities: usize,
    pub max_identities: usize,
    pub allowed: u64,
    pub denied: u64,
    pub evictions: u64,
}

/// Port for the per-caller sliding-window store.
///
/// `admit` must serialize concurrent calls for the same identity (two
/// racing callers must not both take the last window slot); calls for
/// different identities must not contend on a global lock.
pub trait AdmissionStorePort: Send + Sync {
    fn admit(&self, identity: &str, now_ms: u64) -> AdmissionDecision;

    fn clear(&self);

    fn len(&self) -> usize;

    fn stats(&self) -> AdmissionStatsSnapshot;
}
