use super::attempt::ResolutionAttempt;
use super::iterative::IterativeResolver;
use ferrous_resolve_domain::{is_within_zone, DomainError, RawResponse, ResponseKind};
use futures::future::BoxFuture;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

impl IterativeResolver {
    /// Asks `server` about the attempt's query and keeps walking down
    /// whatever referral comes back.
    ///
    /// Returns an answer or an authoritative negative response. Every other
    /// outcome (transport failure, server error, loop guard, exhausted
    /// referral) fails only this branch; the caller decides whether to try
    /// a sibling server.
    pub(super) fn descend<'a>(
        &'a self,
        server: IpAddr,
        attempt: &'a mut ResolutionAttempt,
        depth: usize,
    ) -> BoxFuture<'a, Result<Arc<RawResponse>, DomainError>> {
        Box::pin(async move {
            if depth > self.config.max_referral_depth {
                debug!(server = %server, depth, "Referral depth limit reached");
                return Err(DomainError::ReferralDepthExceeded {
                    depth: self.config.max_referral_depth,
                });
            }

            if !attempt.visited.insert(server) {
                debug!(
                    server = %server,
                    domain = %attempt.query.domain,
                    "Server already visited, skipping"
                );
                return Err(DomainError::ServerAlreadyVisited { server });
            }

            if let Some((zone, referral)) =
                self.cache.lookup_deepest_partial(&attempt.labels, server)
            {
                debug!(
                    server = %server,
                    zone = %zone,
                    domain = %attempt.query.domain,
                    "Reusing cached referral"
                );
                return self.follow(referral, attempt, depth).await;
            }

            debug!(
                server = %server,
                domain = %attempt.query.domain,
                record_type = %attempt.query.record_type,
                depth,
                "Querying name server"
            );

            let response = match self
                .client
                .query(server, &attempt.query, self.config.query_timeout)
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    warn!(
                        server = %server,
                        domain = %attempt.query.domain,
                        error = %e,
                        "Name server query failed"
                    );
                    return Err(e);
                }
            };

            if response.rcode.is_server_error() && response.answers.is_empty() {
                debug!(
                    server = %server,
                    rcode = %response.rcode,
                    "Name server refused to help"
                );
                return Err(DomainError::ServerError {
                    server,
                    rcode: response.rcode.to_string(),
                });
            }

            let response = Arc::new(response);
            match response.kind() {
                ResponseKind::Answer | ResponseKind::Negative => Ok(response),
                ResponseKind::Referral => {
                    self.remember_referral(attempt, &response);
                    self.follow(response, attempt, depth).await
                }
            }
        })
    }

    /// Stores a referral under its zone cut for every server contacted so
    /// far, so later walks that reach any of them skip straight to it.
    fn remember_referral(&self, attempt: &ResolutionAttempt, referral: &Arc<RawResponse>) {
        let Some(zone) = referral.zone_cut() else {
            return;
        };
        if zone.as_ref() == "." || !is_within_zone(&attempt.query.domain, zone) {
            return;
        }

        for server in attempt.visited.iter() {
            self.cache
                .store_partial(Arc::clone(zone), *server, Arc::clone(referral));
        }
        debug!(
            zone = %zone,
            servers = attempt.visited.len(),
            "Cached referral"
        );
    }
}
