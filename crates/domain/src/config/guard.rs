use serde::{Deserialize, Serialize};

/// Egress guard and fetch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuardConfig {
    /// Per-lookup DNS resolver timeout.
    #[serde(default = "default_resolver_timeout_ms")]
    pub resolver_timeout_ms: u64,

    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,

    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// Hard upper bound on any caller-supplied fetch timeout.
    #[serde(default = "default_fetch_timeout_max_ms")]
    pub fetch_timeout_max_ms: u64,

    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            resolver_timeout_ms: default_resolver_timeout_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_max_entries: default_cache_max_entries(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            fetch_timeout_max_ms: default_fetch_timeout_max_ms(),
            max_redirects: default_max_redirects(),
        }
    }
}

fn default_resolver_timeout_ms() -> u64 {
    3000
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_cache_max_entries() -> usize {
    1000
}

fn default_fetch_timeout_ms() -> u64 {
    30_000
}

fn default_fetch_timeout_max_ms() -> u64 {
    120_000
}

fn default_max_redirects() -> u32 {
    5
}
