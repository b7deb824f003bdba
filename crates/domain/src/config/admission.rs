use serde::{Deserialize, Serialize};

/// Per-caller sliding-window admission configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdmissionConfig {
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    #[serde(default = "default_window_ms")]
    pub window_ms: u64,

    /// Cap on distinct caller identities tracked at once.
    #[serde(default = "default_max_identities")]
    pub max_identities: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_ms: default_window_ms(),
            max_identities: default_max_identities(),
        }
    }
}

fn default_max_requests() -> u32 {
    5
}

fn default_window_ms() -> u64 {
    60_000
}

fn default_max_identities() -> usize {
    10_000
}
