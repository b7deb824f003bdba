use thiserror::Error;

use crate::verdict::DenyReason;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Egress denied: {0}")]
    EgressDenied(DenyReason),

    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    AdmissionDenied { retry_after_secs: u64 },

    #[error("Fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Fetch timed out for {0}")]
    FetchTimeout(String),

    #[error("Redirect limit exceeded fetching {0}")]
    TooManyRedirects(String),

    #[error("Resolver error: {0}")]
    Resolver(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
