use std::net::IpAddr;
use std::sync::Arc;

use tracing::debug;
use url::{Host, Url};

use crate::ports::{HostResolver, ResolutionCachePort};
use pagegate_domain::{forbidden_category, DenyReason, ValidatedUrl, Verdict};

/// Hostnames refused before any DNS resolution. Cloud metadata services
/// publish stable names that would otherwise resolve to link-local space
/// only at connection time.
const BLOCKED_HOSTNAMES: &[&str] = &[
    "localhost",
    "metadata.google.internal",
    "metadata.goog",
    "metadata.azure.internal",
    "instance-data",
];

/// The egress guard.
///
/// Decides whether a candidate URL is safe to contact. Used identically for
/// the primary navigation target and for every sub-request a fetch issues.
/// Denials are returned as [`Verdict::Denied`] values; the guard itself
/// never retries and never panics on malformed input.
pub struct ValidateUrlUseCase {
    resolver: Arc<dyn HostResolver>,
    cache: Arc<dyn ResolutionCachePort>,
}

impl ValidateUrlUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>, cache: Arc<dyn ResolutionCachePort>) -> Self {
        Self { resolver, cache }
    }

    pub async fn execute(&self, candidate: &str) -> Verdict {
        let url = match Url::parse(candidate) {
            Ok(url) => url,
            Err(e) => {
                return Verdict::Denied(DenyReason::MalformedUrl(format!("{candidate}: {e}")));
            }
        };

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Verdict::Denied(DenyReason::UnsupportedScheme(other.to_string()));
            }
        }

        let host = match url.host() {
            Some(host) => host.to_owned(),
            None => {
                return Verdict::Denied(DenyReason::MissingHost(candidate.to_string()));
            }
        };

        match host {
            // IP-literal hosts skip DNS entirely.
            Host::Ipv4(v4) => self.verdict_for_addresses(url, vec![IpAddr::V4(v4)]),
            Host::Ipv6(v6) => self.verdict_for_addresses(url, vec![IpAddr::V6(v6)]),
            Host::Domain(domain) => {
                let domain = domain.to_ascii_lowercase();

                if is_blocked_hostname(&domain) {
                    return Verdict::Denied(DenyReason::BlockedHostname(domain));
                }

                match self.resolve(&domain).await {
                    Ok(addresses) => self.verdict_for_addresses(url, addresses),
                    Err(detail) => Verdict::Denied(DenyReason::ResolutionFailed {
                        host: domain,
                        detail,
                    }),
                }
            }
        }
    }

    /// Cache-through resolution of both address families.
    ///
    /// Two concurrent validations of the same hostname may both miss and
    /// both resolve; the second insert supersedes the first, which is
    /// harmless since resolution is idempotent.
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, String> {
        if let Some(cached) = self.cache.get(domain) {
            debug!(host = %domain, addresses = cached.len(), "Resolution cache hit");
            return Ok(cached.as_ref().clone());
        }

        let (v4, v6) = tokio::join!(
            self.resolver.lookup_ipv4(domain),
            self.resolver.lookup_ipv6(domain),
        );

        let mut addresses = Vec::new();
        let mut failures = Vec::new();

        match v4 {
            Ok(addrs) => addresses.extend(addrs),
            Err(e) => failures.push(format!("A: {e}")),
        }
        match v6 {
            Ok(addrs) => addresses.extend(addrs),
            Err(e) => failures.push(format!("AAAA: {e}")),
        }

        if addresses.is_empty() {
            let detail = if failures.is_empty() {
                "no address records returned".to_string()
            } else {
                failures.join("; ")
            };
            return Err(detail);
        }

        debug!(host = %domain, addresses = addresses.len(), "Resolved and cached");
        self.cache.insert(domain, addresses.clone());

        Ok(addresses)
    }

    /// Any forbidden address denies the whole URL: a multi-record response
    /// lets the eventual TCP connection pick any record, and rebinding can
    /// swap records between validation and connection time.
    fn verdict_for_addresses(&self, url: Url, addresses: Vec<IpAddr>) -> Verdict {
        for &address in &addresses {
            if let Some(category) = forbidden_category(address) {
                debug!(url = %url, address = %address, category = %category, "Egress denied");
                return Verdict::Denied(DenyReason::ForbiddenAddress { address, category });
            }
        }

        Verdict::Allowed(ValidatedUrl { url, addresses })
    }
}

fn is_blocked_hostname(domain: &str) -> bool {
    BLOCKED_HOSTNAMES
        .iter()
        .any(|blocked| domain == *blocked || domain.ends_with(&format!(".{blocked}")))
}

#[cfg(test)]
mod tests {
    use super::is_blocked_hostname;

    #[test]
    fn test_blocked_hostname_exact_and_subdomain() {
        assert!(is_blocked_hostname("metadata.google.internal"));
        assert!(is_blocked_hostname("sub.metadata.google.internal"));
        assert!(is_blocked_hostname("localhost"));
        assert!(!is_blocked_hostname("example.com"));
        assert!(!is_blocked_hostname("notlocalhost"));
    }
}
