use std::net::IpAddr;

/// Servers already contacted during one resolution attempt, in contact order.
///
/// Only grows; a server is recorded at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    servers: Vec<IpAddr>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `server`. Returns `false` when it was already present.
    pub fn insert(&mut self, server: IpAddr) -> bool {
        if self.servers.contains(&server) {
            return false;
        }
        self.servers.push(server);
        true
    }

    pub fn contains(&self, server: &IpAddr) -> bool {
        self.servers.contains(server)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IpAddr> {
        self.servers.iter()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_once() {
        let mut visited = VisitedSet::new();
        let root: IpAddr = "198.41.0.4".parse().unwrap();

        assert!(visited.insert(root));
        assert!(!visited.insert(root));
        assert!(visited.contains(&root));
        assert_eq!(visited.len(), 1);
    }
}
