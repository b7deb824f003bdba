//! Egress validation outcomes.

use std::net::IpAddr;

use thiserror::Error;
use url::Url;

use crate::address::AddressCategory;

/// Why a candidate URL was refused.
///
/// Denials are expected outcomes, carried as values all the way to the API
/// layer. The `Display` text is the caller-visible reason string; it never
/// includes resolver internals beyond the aggregated error text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    #[error("Unsupported scheme '{0}': only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("URL has no hostname: {0}")]
    MissingHost(String),

    #[error("Address {address} is in a forbidden range ({category})")]
    ForbiddenAddress {
        address: IpAddr,
        category: AddressCategory,
    },

    #[error("Hostname '{0}' is on the blocked hostname list")]
    BlockedHostname(String),

    #[error("DNS resolution failed for '{host}': {detail}")]
    ResolutionFailed { host: String, detail: String },
}

/// A URL that passed egress validation.
#[derive(Debug, Clone)]
pub struct ValidatedUrl {
    pub url: Url,
    /// Addresses the validation was based on; for an IP-literal host this
    /// is the literal itself.
    pub addresses: Vec<IpAddr>,
}

impl ValidatedUrl {
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// Result of validating a single candidate URL.
///
/// Created fresh per validation call and immediately consumed; never stored.
#[derive(Debug, Clone)]
pub enum Verdict {
    Allowed(ValidatedUrl),
    Denied(DenyReason),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed(_))
    }

    pub fn deny_reason(&self) -> Option<&DenyReason> {
        match self {
            Verdict::Allowed(_) => None,
            Verdict::Denied(reason) => Some(reason),
        }
    }
}
