use async_trait::async_trait;
use pagegate_domain::{DomainError, FetchOptions, FetchedPage, ValidatedUrl};

/// Port for the downstream page fetcher.
///
/// The target has already passed egress validation; implementations remain
/// responsible for re-validating every redirect hop before it is followed,
/// and for isolating request state (no cookies or connections shared across
/// fetches).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(
        &self,
        target: &ValidatedUrl,
        options: &FetchOptions,
    ) -> Result<FetchedPage, DomainError>;
}
