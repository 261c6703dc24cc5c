use super::DnsTransport;
use async_trait::async_trait;
use ferrous_resolve_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Classic DNS message size limit without EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 512;

/// DNS over UDP transport, one ephemeral socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn unreachable(&self, action: &str, e: io::Error) -> DomainError {
        DomainError::TransportUnreachable {
            server: self.server_addr.ip(),
            reason: format!("{} {}: {}", action, self.server_addr, e),
        }
    }

    fn timed_out(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.ip(),
        }
    }

    /// One query and its reply, bounded as a whole by `timeout`.
    async fn send_once(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.unreachable("Failed to bind UDP socket for", e))?;

        tokio::time::timeout(timeout, self.round_trip(&socket, message_bytes))
            .await
            .map_err(|_| self.timed_out())?
    }

    async fn round_trip(
        &self,
        socket: &UdpSocket,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| self.unreachable("Failed to send UDP query to", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| self.unreachable("Failed to receive UDP response from", e))?;

            // Only the queried server may answer; anything else is dropped
            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "Dropping UDP datagram from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );
            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        self.send_once(message_bytes, timeout).await
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
