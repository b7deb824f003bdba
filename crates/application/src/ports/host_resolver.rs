use async_trait::async_trait;
use pagegate_domain::DomainError;
use std::net::IpAddr;

/// Port for DNS address-record lookups.
///
/// The two families are independent calls so the egress guard can run them
/// concurrently and aggregate failures. Implementations must bound each call
/// with the configured resolver timeout and surface expiry as an `Err`,
/// never as a hang.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup_ipv4(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;

    async fn lookup_ipv6(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;
}
