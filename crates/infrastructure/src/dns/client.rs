use super::codec::{MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use ferrous_resolve_application::ports::NameServerClient;
use ferrous_resolve_domain::{DnsQuery, DomainError, RawResponse};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

pub const DNS_PORT: u16 = 53;

/// Queries authoritative servers over UDP using the hickory-proto codec.
pub struct UdpNameServerClient {
    port: u16,
}

impl UdpNameServerClient {
    pub fn new() -> Self {
        Self { port: DNS_PORT }
    }

    /// Contact every server on `port` instead of 53.
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }
}

impl Default for UdpNameServerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameServerClient for UdpNameServerClient {
    async fn query(
        &self,
        server: IpAddr,
        query: &DnsQuery,
        timeout: Duration,
    ) -> Result<RawResponse, DomainError> {
        let (id, bytes) = MessageBuilder::build_query_with_id(&query.domain, &query.record_type)?;
        let transport = UdpTransport::new(SocketAddr::new(server, self.port));

        let reply = transport.send(&bytes, timeout).await?;
        debug!(
            server = %server,
            protocol = transport.protocol_name(),
            bytes = reply.len(),
            "Name server replied"
        );
        let parsed = ResponseParser::parse(&reply, server)?;

        if parsed.id != id {
            return Err(DomainError::MalformedResponse {
                server,
                reason: format!("response ID {} does not match query ID {}", parsed.id, id),
            });
        }
        if parsed.truncated {
            debug!(
                server = %server,
                domain = %query.domain,
                "Truncated response, using partial sections"
            );
        }

        Ok(parsed.response)
    }
}
