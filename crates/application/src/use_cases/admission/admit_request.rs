use std::sync::Arc;

use tracing::debug;

use crate::ports::{AdmissionDecision, AdmissionStorePort};

/// The admission limiter.
///
/// Gates every caller before any fetch work begins. The sliding-window
/// arithmetic lives in the store so that per-identity updates happen under
/// the store's per-key lock; this use case adds identity normalization and
/// logging.
pub struct AdmitRequestUseCase {
    store: Arc<dyn AdmissionStorePort>,
}

impl AdmitRequestUseCase {
    pub fn new(store: Arc<dyn AdmissionStorePort>) -> Self {
        Self { store }
    }

    pub fn execute(&self, identity: &str, now_ms: u64) -> AdmissionDecision {
        let identity = if identity.is_empty() {
            "unknown"
        } else {
            identity
        };

        let decision = self.store.admit(identity, now_ms);

        if !decision.allowed {
            debug!(
                identity = %identity,
                retry_after_secs = decision.retry_after_secs.unwrap_or(0),
                "Admission denied"
            );
        }

        decision
    }
}
