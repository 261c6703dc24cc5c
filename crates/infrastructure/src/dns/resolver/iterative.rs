use super::super::cache::ResolutionCache;
use super::attempt::ResolutionAttempt;
use super::config::ResolverConfig;
use super::root_servers::RootServerSet;
use async_trait::async_trait;
use ferrous_resolve_application::ports::{DnsResolver, NameServerClient};
use ferrous_resolve_domain::{DnsQuery, DomainError, RawResponse, RecordType, VisitedScope};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves names by walking from the root servers down the delegation
/// tree, one non-recursive query at a time.
pub struct IterativeResolver {
    pub(super) client: Arc<dyn NameServerClient>,
    pub(super) cache: Arc<ResolutionCache>,
    pub(super) roots: RootServerSet,
    pub(super) config: ResolverConfig,
}

impl IterativeResolver {
    pub fn new(
        client: Arc<dyn NameServerClient>,
        cache: Arc<ResolutionCache>,
        roots: RootServerSet,
        config: ResolverConfig,
    ) -> Self {
        Self {
            client,
            cache,
            roots,
            config,
        }
    }

    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub async fn resolve(&self, query: &DnsQuery) -> Result<Arc<RawResponse>, DomainError> {
        self.resolve_at_depth(query.clone(), 0).await
    }

    /// Top-level resolution, `lookup_depth` levels inside name server
    /// address lookups.
    pub(super) fn resolve_at_depth(
        &self,
        query: DnsQuery,
        lookup_depth: usize,
    ) -> BoxFuture<'_, Result<Arc<RawResponse>, DomainError>> {
        Box::pin(async move {
            if let Some(cached) = self.cache.lookup_full(&query) {
                debug!(domain = %query.domain, record_type = %query.record_type, "Cache HIT");
                return Ok(cached);
            }

            let mut chain: Vec<Arc<str>> = vec![Arc::clone(&query.domain)];
            let mut current = query.clone();

            let response = loop {
                let response = self.walk_from_roots(&current, lookup_depth).await?;

                let targets = aliases_to_chase(&current, &response);
                let Some(last) = targets.last().cloned() else {
                    break response;
                };

                for target in targets {
                    if chain.contains(&target) {
                        debug!(domain = %query.domain, alias = %target, "CNAME loop detected");
                        return Err(DomainError::CnameLoop {
                            name: target.to_string(),
                        });
                    }
                    if chain.len() > self.config.max_cname_hops {
                        debug!(
                            domain = %query.domain,
                            hops = self.config.max_cname_hops,
                            "CNAME chain too long"
                        );
                        return Err(DomainError::CnameChainTooLong {
                            name: query.domain.to_string(),
                            hops: self.config.max_cname_hops,
                        });
                    }
                    chain.push(target);
                }

                debug!(alias = %current.domain, target = %last, "Following CNAME");
                current = query.with_domain(last);

                if let Some(cached) = self.cache.lookup_full(&current) {
                    break cached;
                }
            };

            for name in &chain {
                self.cache
                    .store_full(&query.with_domain(Arc::clone(name)), Arc::clone(&response));
            }
            Ok(response)
        })
    }

    /// Tries each root in turn until one walk ends in an answer or an
    /// authoritative negative response.
    async fn walk_from_roots(
        &self,
        query: &DnsQuery,
        lookup_depth: usize,
    ) -> Result<Arc<RawResponse>, DomainError> {
        let roots = self.roots.ordered(self.config.root_order);
        if roots.is_empty() {
            return Err(DomainError::NoRootServers);
        }

        let mut attempt = ResolutionAttempt::new(query.clone(), lookup_depth);
        let mut last_error = None;

        for root in roots {
            if self.config.visited_scope == VisitedScope::PerRoot {
                attempt.reset_visited();
            }

            match self.descend(root, &mut attempt, 0).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if e.is_guard_abort() {
                        debug!(
                            server = %root,
                            domain = %query.domain,
                            error = %e,
                            "Root attempt aborted"
                        );
                    } else {
                        warn!(
                            server = %root,
                            domain = %query.domain,
                            error = %e,
                            "Root attempt failed"
                        );
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(DomainError::AllRootServersFailed {
            last: Box::new(last_error.unwrap_or(DomainError::NoRootServers)),
        })
    }
}

/// Aliases to follow next, in chain order, when the response answers the
/// query name with a CNAME instead of the requested type.
///
/// Follows CNAMEs inside the answer section starting from the query name,
/// so records ahead of the alias (a DNAME, say) do not hide it. Empty when
/// the chain ends at a name the answer already has the requested type for.
fn aliases_to_chase(query: &DnsQuery, response: &RawResponse) -> Vec<Arc<str>> {
    if query.record_type == RecordType::CNAME {
        return Vec::new();
    }

    let mut path: Vec<Arc<str>> = Vec::new();
    let mut owner = Arc::clone(&query.domain);
    while let Some(target) = response
        .answers
        .iter()
        .filter(|record| record.name == owner)
        .find_map(|record| record.alias_target())
    {
        path.push(Arc::clone(target));
        // Cyclic chains are reported by the caller's loop check
        if path.len() > response.answers.len() {
            break;
        }
        owner = Arc::clone(target);
    }

    let answered = response
        .answers_of(query.record_type)
        .any(|record| record.name == owner);
    if answered {
        return Vec::new();
    }
    path
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Arc<RawResponse>, DomainError> {
        IterativeResolver::resolve(self, query).await
    }
}
