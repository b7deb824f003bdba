use std::sync::Arc;
use std::time::{Duration, Instant};

use pagegate_api::AppState;
use pagegate_application::use_cases::{AdmitRequestUseCase, FetchPageUseCase, ValidateUrlUseCase};
use pagegate_domain::Config;
use pagegate_infrastructure::{
    HickoryHostResolver, HttpPageFetcher, ResolutionCache, SlidingWindowStore,
};
use tracing::debug;

pub struct Services;

impl Services {
    /// Wire adapters and use cases into the shared application state.
    pub fn build(config: &Config) -> anyhow::Result<AppState> {
        let resolver = Arc::new(HickoryHostResolver::new(config.guard.resolver_timeout_ms)?);
        let resolution_cache = Arc::new(ResolutionCache::new(
            config.guard.cache_max_entries,
            Duration::from_secs(config.guard.cache_ttl_secs),
        ));
        let admission_store = Arc::new(SlidingWindowStore::new(
            config.admission.max_requests,
            config.admission.window_ms,
            config.admission.max_identities,
        ));

        let validate = Arc::new(ValidateUrlUseCase::new(resolver, resolution_cache.clone()));
        let fetcher = Arc::new(HttpPageFetcher::new(&config.guard, validate.clone())?);
        let fetch = Arc::new(FetchPageUseCase::new(validate.clone(), fetcher));
        let admit = Arc::new(AdmitRequestUseCase::new(admission_store.clone()));

        debug!(
            cache_max_entries = config.guard.cache_max_entries,
            admission_max_identities = config.admission.max_identities,
            "Services wired"
        );

        Ok(AppState {
            admit,
            validate,
            fetch,
            resolution_cache,
            admission_store,
            started_at: Instant::now(),
        })
    }
}
