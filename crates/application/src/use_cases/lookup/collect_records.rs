use super::report::{AddressRecord, AliasRecord, LookupReport, MailExchangeRecord};
use crate::ports::DnsResolver;
use ferrous_resolve_domain::{DnsQuery, DomainError, RawResponse, RecordData, RecordType};
use std::sync::Arc;
use tracing::{debug, warn};

/// Looks a name up for CNAME, A, AAAA and MX and groups what comes back.
pub struct CollectRecordsUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CollectRecordsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Fails only when `name` is not a valid domain name. A record type
    /// that cannot be resolved contributes nothing to the report.
    pub async fn execute(&self, name: &str) -> Result<LookupReport, DomainError> {
        let mut report = LookupReport::default();

        for record_type in RecordType::lookup_order() {
            let query = DnsQuery::parse(name, record_type)?;
            let Some(response) = self.resolve_or_log(&query).await else {
                continue;
            };

            match record_type {
                RecordType::CNAME => report.cnames.extend(aliases(name, &response)),
                RecordType::A => report.addresses.extend(addresses(&response, RecordType::A)),
                RecordType::AAAA => report
                    .ipv6_addresses
                    .extend(addresses(&response, RecordType::AAAA)),
                RecordType::MX => report.mail_exchangers.extend(mail_exchangers(&response)),
                _ => {}
            }
        }

        Ok(report)
    }

    async fn resolve_or_log(&self, query: &DnsQuery) -> Option<Arc<RawResponse>> {
        match self.resolver.resolve(query).await {
            Ok(response) => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    kind = ?response.kind(),
                    "Lookup finished"
                );
                Some(response)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    "Lookup failed"
                );
                None
            }
        }
    }
}

fn aliases(alias: &str, response: &RawResponse) -> Vec<AliasRecord> {
    response
        .answers_of(RecordType::CNAME)
        .filter_map(|r| r.alias_target())
        .map(|target| AliasRecord {
            alias: alias.to_string(),
            name: Arc::clone(target),
        })
        .collect()
}

fn addresses(response: &RawResponse, record_type: RecordType) -> Vec<AddressRecord> {
    response
        .answers_of(record_type)
        .filter_map(|r| {
            r.address().map(|address| AddressRecord {
                name: Arc::clone(&r.name),
                address,
            })
        })
        .collect()
}

fn mail_exchangers(response: &RawResponse) -> Vec<MailExchangeRecord> {
    response
        .answers
        .iter()
        .filter_map(|r| match &r.data {
            RecordData::MX {
                preference,
                exchange,
            } => Some(MailExchangeRecord {
                name: Arc::clone(&r.name),
                preference: *preference,
                exchange: Arc::clone(exchange),
            }),
            _ => None,
        })
        .collect()
}
