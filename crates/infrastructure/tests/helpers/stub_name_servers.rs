#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_resolve_application::ports::NameServerClient;
use ferrous_resolve_domain::{
    DnsQuery, DomainError, RawResponse, RecordData, RecordType, ResourceRecord, ResponseCode,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Stub NameServerClient
// ============================================================================

#[derive(Clone)]
enum StubReply {
    Response(RawResponse),
    Timeout,
}

/// Serves canned responses per (server, name, type) and records every
/// query that would have gone over the network, in order.
#[derive(Clone, Default)]
pub struct StubNameServerClient {
    replies: Arc<Mutex<HashMap<(IpAddr, String, RecordType), StubReply>>>,
    contacts: Arc<Mutex<Vec<(IpAddr, DnsQuery)>>>,
}

impl StubNameServerClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: &str, domain: &str, record_type: RecordType, response: RawResponse) {
        self.replies.lock().unwrap().insert(
            (server.parse().unwrap(), domain.to_string(), record_type),
            StubReply::Response(response),
        );
    }

    pub fn time_out(&self, server: &str, domain: &str, record_type: RecordType) {
        self.replies.lock().unwrap().insert(
            (server.parse().unwrap(), domain.to_string(), record_type),
            StubReply::Timeout,
        );
    }

    /// Servers contacted so far, in contact order.
    pub fn contacted(&self) -> Vec<IpAddr> {
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .map(|(server, _)| *server)
            .collect()
    }

    pub fn contacts(&self) -> Vec<(IpAddr, DnsQuery)> {
        self.contacts.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }
}

#[async_trait]
impl NameServerClient for StubNameServerClient {
    async fn query(
        &self,
        server: IpAddr,
        query: &DnsQuery,
        _timeout: Duration,
    ) -> Result<RawResponse, DomainError> {
        self.contacts.lock().unwrap().push((server, query.clone()));

        let key = (server, query.domain.to_string(), query.record_type);
        let reply = self.replies.lock().unwrap().get(&key).cloned();

        match reply {
            Some(StubReply::Response(response)) => Ok(response),
            Some(StubReply::Timeout) => Err(DomainError::TransportTimeout { server }),
            None => Err(DomainError::TransportUnreachable {
                server,
                reason: format!("no stub reply for {}", query),
            }),
        }
    }
}

/// Parses a list of textual addresses, for comparing against `contacted()`.
pub fn ips(addresses: &[&str]) -> Vec<IpAddr> {
    addresses.iter().map(|a| a.parse().unwrap()).collect()
}

// ============================================================================
// Response builders
// ============================================================================

/// Delegation of `zone` to the given (host, glue address) pairs.
pub fn referral(zone: &str, servers: &[(&str, &str)]) -> RawResponse {
    let authorities = servers
        .iter()
        .map(|(host, _)| ns(zone, host))
        .collect();
    let additionals = servers
        .iter()
        .map(|(host, address)| a(host, address))
        .collect();

    RawResponse::new(ResponseCode::NoError, vec![], authorities, additionals)
}

/// Delegation of `zone` with NS records only.
pub fn referral_without_glue(zone: &str, hosts: &[&str]) -> RawResponse {
    let authorities = hosts.iter().map(|host| ns(zone, host)).collect();
    RawResponse::new(ResponseCode::NoError, vec![], authorities, vec![])
}

pub fn answer(records: Vec<ResourceRecord>) -> RawResponse {
    RawResponse::new(ResponseCode::NoError, records, vec![], vec![])
}

pub fn negative(zone: &str) -> RawResponse {
    RawResponse::new(ResponseCode::NXDomain, vec![], vec![soa(zone)], vec![])
}

pub fn server_failure() -> RawResponse {
    RawResponse::new(ResponseCode::ServFail, vec![], vec![], vec![])
}

pub fn a(name: &str, address: &str) -> ResourceRecord {
    ResourceRecord::new(name, 300, RecordData::A(address.parse().unwrap()))
}

pub fn cname(name: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(name, 300, RecordData::CNAME(Arc::from(target)))
}

/// A record of a type the resolver carries but does not interpret.
pub fn opaque(name: &str, code: u16) -> ResourceRecord {
    ResourceRecord::new(name, 300, RecordData::Other { code })
}

pub fn ns(zone: &str, host: &str) -> ResourceRecord {
    ResourceRecord::new(zone, 172800, RecordData::NS(Arc::from(host)))
}

pub fn soa(zone: &str) -> ResourceRecord {
    ResourceRecord::new(
        zone,
        900,
        RecordData::SOA {
            mname: Arc::from("ns1.example.com."),
            rname: Arc::from("hostmaster.example.com."),
            serial: 2024010101,
            minimum: 300,
        },
    )
}
