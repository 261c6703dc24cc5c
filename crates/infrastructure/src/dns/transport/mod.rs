pub mod udp;

use async_trait::async_trait;
use ferrous_resolve_domain::DomainError;
use std::time::Duration;

pub use udp::UdpTransport;

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one query and returns the reply in wire format.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
