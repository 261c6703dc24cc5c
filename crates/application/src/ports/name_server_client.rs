use async_trait::async_trait;
use ferrous_resolve_domain::{DnsQuery, DomainError, RawResponse};
use std::net::IpAddr;
use std::time::Duration;

/// Sends one non-recursive query to one name server and decodes the reply.
///
/// Implementations must fail with a transport error (`TransportTimeout`,
/// `TransportUnreachable`, `MalformedResponse`) rather than retry.
#[async_trait]
pub trait NameServerClient: Send + Sync {
    async fn query(
        &self,
        server: IpAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<RawResponse, DomainError>;
}
