use ferrous_resolve_domain::{DnsQuery, RecordType};
use std::net::IpAddr;
use std::sync::Arc;

/// Full-query key: the final response for (name, type).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: Arc<str>, record_type: RecordType) -> Self {
        Self {
            domain,
            record_type,
        }
    }
}

impl From<&DnsQuery> for CacheKey {
    #[inline]
    fn from(query: &DnsQuery) -> Self {
        Self::new(Arc::clone(&query.domain), query.record_type)
    }
}

/// Partial key: the referral a given server handed out for a zone cut.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneKey {
    pub zone: Arc<str>,
    pub server: IpAddr,
}

impl ZoneKey {
    #[inline]
    pub fn new(zone: Arc<str>, server: IpAddr) -> Self {
        Self { zone, server }
    }
}
