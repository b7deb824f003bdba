use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::ports::PageFetcher;
use crate::use_cases::guard::ValidateUrlUseCase;
use pagegate_domain::{DomainError, FetchOptions, FetchedPage, Verdict};

/// Orchestrates a gated page fetch: egress validation of the navigation
/// target, then the downstream fetch. Admission is the API layer's gate and
/// happens before this use case runs.
pub struct FetchPageUseCase {
    guard: Arc<ValidateUrlUseCase>,
    fetcher: Arc<dyn PageFetcher>,
}

impl FetchPageUseCase {
    pub fn new(guard: Arc<ValidateUrlUseCase>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { guard, fetcher }
    }

    pub async fn execute(
        &self,
        candidate: &str,
        options: &FetchOptions,
    ) -> Result<FetchedPage, DomainError> {
        let start = Instant::now();

        let target = match self.guard.execute(candidate).await {
            Verdict::Allowed(target) => target,
            Verdict::Denied(reason) => {
                info!(url = %candidate, reason = %reason, "Blocked navigation target");
                return Err(DomainError::EgressDenied(reason));
            }
        };

        let page = self.fetcher.fetch(&target, options).await?;

        debug!(
            url = %page.url,
            status = page.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Page fetched"
        );

        Ok(page)
    }
}
