use super::RecordType;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Typed record payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    /// Alias target
    CNAME(Arc<str>),
    MX {
        preference: u16,
        exchange: Arc<str>,
    },
    /// Name server host name
    NS(Arc<str>),
    SOA {
        mname: Arc<str>,
        rname: Arc<str>,
        serial: u32,
        minimum: u32,
    },
    /// A type the engine carries but does not interpret (RRSIG, OPT, ...)
    Other { code: u16 },
}

/// One resource record from any response section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name, normalized (lower case, trailing dot)
    pub name: Arc<str>,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    /// Record type, `None` for [`RecordData::Other`].
    pub fn record_type(&self) -> Option<RecordType> {
        match self.data {
            RecordData::A(_) => Some(RecordType::A),
            RecordData::AAAA(_) => Some(RecordType::AAAA),
            RecordData::CNAME(_) => Some(RecordType::CNAME),
            RecordData::MX { .. } => Some(RecordType::MX),
            RecordData::NS(_) => Some(RecordType::NS),
            RecordData::SOA { .. } => Some(RecordType::SOA),
            RecordData::Other { .. } => None,
        }
    }

    pub fn type_code(&self) -> u16 {
        match self.data {
            RecordData::Other { code } => code,
            _ => self.record_type().map(|t| t.to_u16()).unwrap_or(0),
        }
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type() == Some(record_type)
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self.data {
            RecordData::A(v4) => Some(IpAddr::V4(v4)),
            RecordData::AAAA(v6) => Some(IpAddr::V6(v6)),
            _ => None,
        }
    }

    /// Target of a CNAME record.
    pub fn alias_target(&self) -> Option<&Arc<str>> {
        match &self.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        }
    }

    /// Host name of an NS record.
    pub fn nameserver(&self) -> Option<&Arc<str>> {
        match &self.data {
            RecordData::NS(host) => Some(host),
            _ => None,
        }
    }
}
