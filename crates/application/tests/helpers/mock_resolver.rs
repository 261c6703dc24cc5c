#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_resolve_application::ports::DnsResolver;
use ferrous_resolve_domain::{
    DnsQuery, DomainError, RawResponse, RecordData, RecordType, ResourceRecord, ResponseCode,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock DnsResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<(String, RecordType), Arc<RawResponse>>>>,
    failures: Arc<RwLock<HashMap<(String, RecordType), DomainError>>>,
    calls: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, record_type: RecordType, response: RawResponse) {
        self.responses
            .write()
            .await
            .insert((domain.to_string(), record_type), Arc::new(response));
    }

    pub async fn set_failure(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.failures
            .write()
            .await
            .insert((domain.to_string(), record_type), error);
    }

    pub async fn calls(&self) -> Vec<DnsQuery> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Arc<RawResponse>, DomainError> {
        self.calls.write().await.push(query.clone());

        let key = (query.domain.to_string(), query.record_type);
        if let Some(error) = self.failures.read().await.get(&key) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Arc::new(negative(&query.domain))))
    }
}

// ============================================================================
// Response builders
// ============================================================================

pub fn answer(records: Vec<ResourceRecord>) -> RawResponse {
    RawResponse::new(ResponseCode::NoError, records, vec![], vec![])
}

pub fn negative(zone: &str) -> RawResponse {
    RawResponse::new(
        ResponseCode::NoError,
        vec![],
        vec![ResourceRecord::new(
            zone,
            300,
            RecordData::SOA {
                mname: Arc::from("ns1.example.com."),
                rname: Arc::from("hostmaster.example.com."),
                serial: 2024010101,
                minimum: 300,
            },
        )],
        vec![],
    )
}

pub fn a(name: &str, address: &str) -> ResourceRecord {
    ResourceRecord::new(name, 300, RecordData::A(address.parse().unwrap()))
}

pub fn aaaa(name: &str, address: &str) -> ResourceRecord {
    ResourceRecord::new(name, 300, RecordData::AAAA(address.parse().unwrap()))
}

pub fn cname(name: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(name, 300, RecordData::CNAME(Arc::from(target)))
}

pub fn mx(name: &str, preference: u16, exchange: &str) -> ResourceRecord {
    ResourceRecord::new(
        name,
        300,
        RecordData::MX {
            preference,
            exchange: Arc::from(exchange),
        },
    )
}
