use super::dns_record::{RecordData, RecordType, ResourceRecord};
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }

    /// Codes meaning the server could not or would not help.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            ResponseCode::ServFail
                | ResponseCode::Refused
                | ResponseCode::NotImp
                | ResponseCode::FormErr
        )
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

/// How a single server's response moves the resolution forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// The answer section is populated.
    Answer,
    /// No answer, and the server is authoritative that there is none
    /// (SOA first in authority, or NXDOMAIN).
    Negative,
    /// Points somewhere further down the tree.
    Referral,
}

/// The three sections of one server's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub rcode: ResponseCode,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl RawResponse {
    pub fn new(
        rcode: ResponseCode,
        answers: Vec<ResourceRecord>,
        authorities: Vec<ResourceRecord>,
        additionals: Vec<ResourceRecord>,
    ) -> Self {
        Self {
            rcode,
            answers,
            authorities,
            additionals,
        }
    }

    pub fn kind(&self) -> ResponseKind {
        if !self.answers.is_empty() {
            return ResponseKind::Answer;
        }
        let soa_first = self
            .authorities
            .first()
            .is_some_and(|r| r.is_type(RecordType::SOA));
        if soa_first || self.rcode == ResponseCode::NXDomain {
            return ResponseKind::Negative;
        }
        ResponseKind::Referral
    }

    pub fn is_answer(&self) -> bool {
        self.kind() == ResponseKind::Answer
    }

    pub fn is_negative(&self) -> bool {
        self.kind() == ResponseKind::Negative
    }

    pub fn answers_of(&self, record_type: RecordType) -> impl Iterator<Item = &ResourceRecord> {
        self.answers.iter().filter(move |r| r.is_type(record_type))
    }

    /// Owner of the delegation in a referral: the NS records' owner name,
    /// falling back to the first authority record's owner.
    pub fn zone_cut(&self) -> Option<&Arc<str>> {
        self.authorities
            .iter()
            .find(|r| r.is_type(RecordType::NS))
            .or_else(|| self.authorities.first())
            .map(|r| &r.name)
    }

    /// NS host names from the authority section, in order, deduplicated.
    pub fn nameservers(&self) -> Vec<Arc<str>> {
        let mut hosts: Vec<Arc<str>> = Vec::new();
        for host in self.authorities.iter().filter_map(|r| r.nameserver()) {
            if !hosts.contains(host) {
                hosts.push(Arc::clone(host));
            }
        }
        hosts
    }

    /// Glue addresses from the additional section, in order.
    ///
    /// When the referral names its servers, only glue owned by one of them
    /// counts. AAAA glue is included only on request.
    pub fn glue(&self, include_ipv6: bool) -> Vec<(Arc<str>, IpAddr)> {
        let nameservers = self.nameservers();
        self.additionals
            .iter()
            .filter(|r| nameservers.is_empty() || nameservers.contains(&r.name))
            .filter_map(|r| match r.data {
                RecordData::A(v4) => Some((Arc::clone(&r.name), IpAddr::V4(v4))),
                RecordData::AAAA(v6) if include_ipv6 => {
                    Some((Arc::clone(&r.name), IpAddr::V6(v6)))
                }
                _ => None,
            })
            .collect()
    }
}
