use super::validators::normalize_name;
use super::{DomainError, RecordType};
use std::fmt;
use std::sync::Arc;

/// DNS query (domain + record type).
/// Uses `Arc<str>` for zero-cost cloning across resolver → cache → descent layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    /// Normalized name (lower case, trailing dot)
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    /// Builds a query from an already normalized name.
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds a query from user input, normalizing the name first.
    pub fn parse(domain: &str, record_type: RecordType) -> Result<Self, DomainError> {
        Ok(Self::new(normalize_name(domain)?, record_type))
    }

    /// Same record type, different name. Used when chasing aliases.
    pub fn with_domain(&self, domain: impl Into<Arc<str>>) -> Self {
        Self::new(domain, self.record_type)
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.record_type)
    }
}
