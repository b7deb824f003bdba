//! Fetch request options and results.

use serde::{Deserialize, Serialize};

/// Per-request fetch options supplied by the caller.
///
/// Both fields are optional; effective values are resolved against the
/// configured defaults and the timeout is clamped to the enforced maximum.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FetchOptions {
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub max_redirects: Option<u32>,
}

impl FetchOptions {
    /// Effective timeout: caller value clamped to `max_ms`, or the default.
    pub fn effective_timeout_ms(&self, default_ms: u64, max_ms: u64) -> u64 {
        self.timeout_ms.unwrap_or(default_ms).min(max_ms)
    }

    pub fn effective_max_redirects(&self, default_hops: u32) -> u32 {
        self.max_redirects.unwrap_or(default_hops)
    }
}

/// A successfully fetched page.
#[derive(Debug, Clone, Serialize)]
pub struct FetchedPage {
    /// Final URL after any validated redirects.
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
    pub elapsed_ms: u64,
}
