use super::attempt::ResolutionAttempt;
use super::iterative::IterativeResolver;
use ferrous_resolve_domain::{DnsQuery, DomainError, RawResponse, RecordType};
use futures::future::BoxFuture;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

impl IterativeResolver {
    /// Picks the next hop out of a referral.
    ///
    /// Glue addresses are tried first, in the order the server listed them.
    /// Name servers that came without glue are then located with a nested
    /// lookup of their own address.
    pub(super) fn follow<'a>(
        &'a self,
        referral: Arc<RawResponse>,
        attempt: &'a mut ResolutionAttempt,
        depth: usize,
    ) -> BoxFuture<'a, Result<Arc<RawResponse>, DomainError>> {
        Box::pin(async move {
            let zone = referral
                .zone_cut()
                .map(|z| z.to_string())
                .unwrap_or_else(|| attempt.query.domain.to_string());

            let glue = referral.glue(self.config.use_ipv6_glue);
            let mut last_error = None;

            for (host, address) in &glue {
                match self.descend(*address, attempt, depth + 1).await {
                    Ok(response) => return Ok(response),
                    Err(e @ DomainError::ReferralDepthExceeded { .. }) => return Err(e),
                    Err(e) => {
                        debug!(
                            zone = %zone,
                            nameserver = %host,
                            server = %address,
                            error = %e,
                            "Glue candidate failed"
                        );
                        last_error = Some(e);
                    }
                }
            }

            let unglued: Vec<Arc<str>> = referral
                .nameservers()
                .into_iter()
                .filter(|ns| !glue.iter().any(|(host, _)| host == ns))
                .collect();

            for host in unglued {
                let address = match self.find_ip(&host, attempt.lookup_depth + 1).await {
                    Ok(address) => address,
                    Err(e) => {
                        debug!(
                            zone = %zone,
                            nameserver = %host,
                            error = %e,
                            "Could not locate name server"
                        );
                        last_error = Some(e);
                        continue;
                    }
                };

                match self.descend(address, attempt, depth + 1).await {
                    Ok(response) => return Ok(response),
                    Err(e @ DomainError::ReferralDepthExceeded { .. }) => return Err(e),
                    Err(e) => {
                        debug!(
                            zone = %zone,
                            nameserver = %host,
                            server = %address,
                            error = %e,
                            "Name server candidate failed"
                        );
                        last_error = Some(e);
                    }
                }
            }

            match &last_error {
                Some(e) => warn!(
                    zone = %zone,
                    domain = %attempt.query.domain,
                    last_error = %e,
                    "Referral exhausted"
                ),
                None => warn!(
                    zone = %zone,
                    domain = %attempt.query.domain,
                    "Referral has no usable name servers"
                ),
            }
            Err(DomainError::ReferralExhausted { zone })
        })
    }

    /// Address of a name server, found with a nested top-level A lookup.
    ///
    /// The nested walk shares the cache but gets its own visited set.
    pub(super) fn find_ip<'a>(
        &'a self,
        host: &'a Arc<str>,
        lookup_depth: usize,
    ) -> BoxFuture<'a, Result<IpAddr, DomainError>> {
        Box::pin(async move {
            if lookup_depth > self.config.max_nameserver_lookup_depth {
                debug!(nameserver = %host, lookup_depth, "Nested lookup depth limit reached");
                return Err(DomainError::NameserverLookupDepthExceeded {
                    name: host.to_string(),
                });
            }

            debug!(nameserver = %host, lookup_depth, "Resolving name server address");
            let query = DnsQuery::new(Arc::clone(host), RecordType::A);
            let response = self.resolve_at_depth(query, lookup_depth).await?;

            let address = response
                .answers_of(RecordType::A)
                .find_map(|record| record.address());
            address.ok_or_else(|| DomainError::NoAddressFound {
                name: host.to_string(),
            })
        })
    }
}
