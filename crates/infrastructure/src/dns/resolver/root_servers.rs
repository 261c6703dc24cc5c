use ferrous_resolve_domain::RootOrder;
use std::net::{IpAddr, Ipv4Addr};

/// a.root-servers.net through m.root-servers.net, current as of March 2018.
pub const ROOT_SERVERS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(199, 9, 14, 201),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
    Ipv4Addr::new(192, 5, 5, 241),
    Ipv4Addr::new(192, 112, 36, 4),
    Ipv4Addr::new(198, 97, 190, 53),
    Ipv4Addr::new(192, 36, 148, 17),
    Ipv4Addr::new(192, 58, 128, 30),
    Ipv4Addr::new(193, 0, 14, 129),
    Ipv4Addr::new(199, 7, 83, 42),
    Ipv4Addr::new(202, 12, 27, 33),
];

/// Entry points for every top-level query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootServerSet {
    servers: Vec<IpAddr>,
}

impl RootServerSet {
    pub fn new(servers: Vec<IpAddr>) -> Self {
        Self { servers }
    }

    pub fn builtin() -> Self {
        Self::new(ROOT_SERVERS.iter().copied().map(IpAddr::V4).collect())
    }

    /// Configured servers, or the built-in list when none are configured.
    pub fn from_config(servers: &[IpAddr]) -> Self {
        if servers.is_empty() {
            Self::builtin()
        } else {
            Self::new(servers.to_vec())
        }
    }

    /// Servers in the order one top-level query should try them.
    pub fn ordered(&self, order: RootOrder) -> Vec<IpAddr> {
        let mut servers = self.servers.clone();
        if order == RootOrder::Shuffled {
            fastrand::shuffle(&mut servers);
        }
        servers
    }

    pub fn servers(&self) -> &[IpAddr] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl Default for RootServerSet {
    fn default() -> Self {
        Self::builtin()
    }
}
