use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Query to {server} timed out")]
    TransportTimeout { server: IpAddr },

    #[error("Name server {server} unreachable: {reason}")]
    TransportUnreachable { server: IpAddr, reason: String },

    #[error("Malformed response from {server}: {reason}")]
    MalformedResponse { server: IpAddr, reason: String },

    #[error("Name server {server} answered {rcode}")]
    ServerError { server: IpAddr, rcode: String },

    #[error("Name server {server} already queried in this resolution")]
    ServerAlreadyVisited { server: IpAddr },

    #[error("No usable next hop in referral for zone {zone}")]
    ReferralExhausted { zone: String },

    #[error("Referral chain exceeded maximum depth of {depth}")]
    ReferralDepthExceeded { depth: usize },

    #[error("Nested name server lookup for {name} exceeded maximum depth")]
    NameserverLookupDepthExceeded { name: String },

    #[error("CNAME loop detected at {name}")]
    CnameLoop { name: String },

    #[error("CNAME chain from {name} exceeded {hops} hops")]
    CnameChainTooLong { name: String, hops: usize },

    #[error("All root servers failed, last error: {last}")]
    AllRootServersFailed { last: Box<DomainError> },

    #[error("No root servers configured")]
    NoRootServers,

    #[error("No address found for {name}")]
    NoAddressFound { name: String },
}

impl DomainError {
    /// Failures raised by the recursion guards rather than by a server.
    pub fn is_guard_abort(&self) -> bool {
        matches!(
            self,
            DomainError::ServerAlreadyVisited { .. }
                | DomainError::ReferralDepthExceeded { .. }
                | DomainError::NameserverLookupDepthExceeded { .. }
                | DomainError::CnameLoop { .. }
                | DomainError::CnameChainTooLong { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_abort_classification() {
        let server: IpAddr = "198.41.0.4".parse().unwrap();

        assert!(!DomainError::TransportTimeout { server }.is_guard_abort());
        assert!(DomainError::ServerAlreadyVisited { server }.is_guard_abort());
        assert!(!DomainError::ReferralExhausted {
            zone: "com.".to_string()
        }
        .is_guard_abort());
    }

    #[test]
    fn test_all_roots_failed_message_carries_last_error() {
        let server: IpAddr = "192.5.5.241".parse().unwrap();
        let err = DomainError::AllRootServersFailed {
            last: Box::new(DomainError::TransportTimeout { server }),
        };
        assert_eq!(
            err.to_string(),
            "All root servers failed, last error: Query to 192.5.5.241 timed out"
        );
    }
}
