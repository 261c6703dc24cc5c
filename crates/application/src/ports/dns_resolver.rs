use async_trait::async_trait;
use ferrous_resolve_domain::{DnsQuery, DomainError, RawResponse};
use std::sync::Arc;

/// Top-level resolution: one query in, the final response out.
///
/// `Ok` carries either an answer or an authoritative negative response;
/// callers tell them apart with [`RawResponse::kind`].
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<Arc<RawResponse>, DomainError>;
}
