use pagegate_application::ports::{AdmissionStorePort, ResolutionCachePort};
use pagegate_application::use_cases::{AdmitRequestUseCase, FetchPageUseCase, ValidateUrlUseCase};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub admit: Arc<AdmitRequestUseCase>,
    pub validate: Arc<ValidateUrlUseCase>,
    pub fetch: Arc<FetchPageUseCase>,
    pub resolution_cache: Arc<dyn ResolutionCachePort>,
    pub admission_store: Arc<dyn AdmissionStorePort>,
    pub started_at: Instant,
}
