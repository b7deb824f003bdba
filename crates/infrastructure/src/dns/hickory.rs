use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use tracing::{debug, info};

use pagegate_application::ports::HostResolver;
use pagegate_domain::DomainError;

/// System-configured hickory resolver with a hard per-lookup timeout.
///
/// A and AAAA lookups are independent so the egress guard can run them
/// concurrently. Timeout expiry is reported as a resolver error; the lookup
/// is never left pending.
pub struct HickoryHostResolver {
    resolver: TokioResolver,
    timeout: Duration,
}

impl HickoryHostResolver {
    pub fn new(timeout_ms: u64) -> Result<Self, DomainError> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| DomainError::Resolver(format!("resolver construction: {e}")))?
            .build();

        info!(timeout_ms, "DNS resolver created");

        Ok(Self {
            resolver,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Bound a lookup future to the resolver timeout. Expiry is surfaced as a
/// resolver error naming the host; the lookup is never left pending.
async fn bounded<F, T>(host: &str, timeout: Duration, fut: F) -> Result<T, DomainError>
where
    F: std::future::Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::Resolver(format!(
            "{host}: lookup timed out after {}ms",
            timeout.as_millis()
        ))),
    }
}

#[async_trait]
impl HostResolver for HickoryHostResolver {
    async fn lookup_ipv4(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        let lookup = bounded(host, self.timeout, async {
            self.resolver
                .ipv4_lookup(host)
                .await
                .map_err(|e| DomainError::Resolver(format!("{host}: {e}")))
        });

        let records = lookup.await?;
        let addresses: Vec<IpAddr> = records.iter().map(|a| IpAddr::V4(a.0)).collect();
        debug!(host = %host, count = addresses.len(), "A lookup complete");
        Ok(addresses)
    }

    async fn lookup_ipv6(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        let lookup = bounded(host, self.timeout, async {
            self.resolver
                .ipv6_lookup(host)
                .await
                .map_err(|e| DomainError::Resolver(format!("{host}: {e}")))
        });

        let records = lookup.await?;
        let addresses: Vec<IpAddr> = records.iter().map(|a| IpAddr::V6(a.0)).collect();
        debug!(host = %host, count = addresses.len(), "AAAA lookup complete");
        Ok(addresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    // Paused time: the timeout fires without real waiting.
    #[tokio::test(start_paused = true)]
    async fn test_hanging_lookup_times_out_as_error() {
        let result: Result<Vec<IpAddr>, DomainError> =
            bounded("slow.example", Duration::from_millis(50), std::future::pending()).await;

        match result {
            Err(DomainError::Resolver(detail)) => {
                assert!(detail.contains("slow.example"), "detail: {detail}");
                assert!(detail.contains("timed out after 50ms"), "detail: {detail}");
            }
            other => panic!("expected resolver timeout error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_completed_lookup_passes_through() {
        let addresses = vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))];

        let result = bounded("fast.example", Duration::from_secs(5), async {
            Ok(addresses.clone())
        })
        .await;

        assert_eq!(result.unwrap(), addresses);
    }

    #[tokio::test]
    async fn test_lookup_error_not_masked_by_timeout() {
        let result: Result<Vec<IpAddr>, DomainError> =
            bounded("down.example", Duration::from_secs(5), async {
                Err(DomainError::Resolver("down.example: SERVFAIL".to_string()))
            })
            .await;

        match result {
            Err(DomainError::Resolver(detail)) => assert!(detail.contains("SERVFAIL")),
            other => panic!("expected resolver error, got {other:?}"),
        }
    }
}
