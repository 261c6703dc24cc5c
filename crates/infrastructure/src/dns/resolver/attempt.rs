use ferrous_resolve_domain::{DnsQuery, LabelStack, VisitedSet};

/// Per-walk state: owned by one top-level resolution and never shared.
#[derive(Debug, Clone)]
pub struct ResolutionAttempt {
    pub query: DnsQuery,
    pub labels: LabelStack,
    pub visited: VisitedSet,
    /// How many name server address lookups this walk is nested inside
    pub lookup_depth: usize,
}

impl ResolutionAttempt {
    pub fn new(query: DnsQuery, lookup_depth: usize) -> Self {
        let labels = LabelStack::new(&query.domain);
        Self {
            query,
            labels,
            visited: VisitedSet::new(),
            lookup_depth,
        }
    }

    /// Forget contacted servers before the next root attempt.
    pub fn reset_visited(&mut self) {
        self.visited = VisitedSet::new();
    }
}
