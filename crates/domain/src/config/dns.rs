use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Order in which root servers are tried for each top-level query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootOrder {
    /// Declaration order, deterministic
    #[default]
    Fixed,
    /// Fresh random permutation per query
    Shuffled,
}

/// How far the set of already-contacted servers reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitedScope {
    /// One set for the whole top-level query. A server reached from one root
    /// is not contacted again when a later root is tried.
    #[default]
    #[serde(rename = "shared")]
    SharedAcrossRoots,
    /// Every root attempt starts with an empty set.
    PerRoot,
}

/// Iterative resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Root server addresses. Empty means the built-in list of 13.
    #[serde(default)]
    pub root_servers: Vec<IpAddr>,

    /// UDP port every name server is contacted on (default: 53)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-query timeout in milliseconds (default: 3000)
    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,

    #[serde(default)]
    pub root_order: RootOrder,

    #[serde(default)]
    pub visited_scope: VisitedScope,

    /// Longest referral chain followed for one query (default: 16)
    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: usize,

    /// Longest alias chain followed for one query (default: 8)
    #[serde(default = "default_max_cname_hops")]
    pub max_cname_hops: usize,

    /// How deep name server address lookups may nest (default: 4)
    #[serde(default = "default_max_nameserver_lookup_depth")]
    pub max_nameserver_lookup_depth: usize,

    /// Also follow AAAA glue records
    #[serde(default)]
    pub use_ipv6_glue: bool,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            root_servers: vec![],
            port: default_port(),
            query_timeout_ms: default_query_timeout(),
            root_order: RootOrder::default(),
            visited_scope: VisitedScope::default(),
            max_referral_depth: default_max_referral_depth(),
            max_cname_hops: default_max_cname_hops(),
            max_nameserver_lookup_depth: default_max_nameserver_lookup_depth(),
            use_ipv6_glue: false,
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    3000
}

fn default_max_referral_depth() -> usize {
    16
}

fn default_max_cname_hops() -> usize {
    8
}

fn default_max_nameserver_lookup_depth() -> usize {
    4
}
