mod admission_store;
mod host_resolver;
mod page_fetcher;
mod resolution_cache;

pub use admission_store::{AdmissionDecision, AdmissionStatsSnapshot, AdmissionStorePort};
pub use host_resolver::HostResolver;
pub use page_fetcher::PageFetcher;
pub use resolution_cache::{CacheStatsSnapshot, ResolutionCachePort};
