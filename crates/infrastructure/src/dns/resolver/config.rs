use ferrous_resolve_domain::{DnsConfig, RootOrder, VisitedScope};
use std::time::Duration;

/// Configuration for the iterative resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Per-query timeout (default: 3s)
    pub query_timeout: Duration,

    /// Root server iteration policy
    pub root_order: RootOrder,

    /// Whether root attempts share one set of contacted servers
    pub visited_scope: VisitedScope,

    /// Longest referral chain followed (default: 16)
    pub max_referral_depth: usize,

    /// Longest alias chain followed (default: 8)
    pub max_cname_hops: usize,

    /// How deep name server address lookups may nest (default: 4)
    pub max_nameserver_lookup_depth: usize,

    /// Follow AAAA glue as well as A glue
    pub use_ipv6_glue: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(3),
            root_order: RootOrder::Fixed,
            visited_scope: VisitedScope::SharedAcrossRoots,
            max_referral_depth: 16,
            max_cname_hops: 8,
            max_nameserver_lookup_depth: 4,
            use_ipv6_glue: false,
        }
    }
}

impl From<&DnsConfig> for ResolverConfig {
    fn from(config: &DnsConfig) -> Self {
        Self {
            query_timeout: Duration::from_millis(config.query_timeout_ms),
            root_order: config.root_order,
            visited_scope: config.visited_scope,
            max_referral_depth: config.max_referral_depth,
            max_cname_hops: config.max_cname_hops,
            max_nameserver_lookup_depth: config.max_nameserver_lookup_depth,
            use_ipv6_glue: config.use_ipv6_glue,
        }
    }
}

impl ResolverConfig {
    /// Create new configuration with custom timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_root_order(mut self, order: RootOrder) -> Self {
        self.root_order = order;
        self
    }

    pub fn with_visited_scope(mut self, scope: VisitedScope) -> Self {
        self.visited_scope = scope;
        self
    }

    pub fn with_max_referral_depth(mut self, depth: usize) -> Self {
        self.max_referral_depth = depth;
        self
    }

    pub fn with_max_cname_hops(mut self, hops: usize) -> Self {
        self.max_cname_hops = hops;
        self
    }

    pub fn with_max_nameserver_lookup_depth(mut self, depth: usize) -> Self {
        self.max_nameserver_lookup_depth = depth;
        self
    }

    pub fn with_ipv6_glue(mut self) -> Self {
        self.use_ipv6_glue = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dns_config() {
        let dns = DnsConfig {
            query_timeout_ms: 1500,
            visited_scope: VisitedScope::PerRoot,
            ..DnsConfig::default()
        };

        let config = ResolverConfig::from(&dns);

        assert_eq!(config.query_timeout, Duration::from_millis(1500));
        assert_eq!(config.visited_scope, VisitedScope::PerRoot);
        assert_eq!(config.max_referral_depth, 16);
    }
}
