use super::{CacheKey, CacheMetrics, CacheStats, ZoneKey};
use dashmap::DashMap;
use ferrous_resolve_domain::{DnsQuery, LabelStack, RawResponse};
use rustc_hash::FxBuildHasher;
use std::net::IpAddr;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use tracing::debug;

/// Two-family resolution cache.
///
/// Full entries map (name, type) to a final response. Partial entries map
/// (zone cut, server) to the referral that server gave for the zone, so a
/// later query below the same cut can skip straight to the delegated
/// servers. Entries are never expired or evicted.
pub struct ResolutionCache {
    full: DashMap<CacheKey, Arc<RawResponse>, FxBuildHasher>,
    partial: DashMap<ZoneKey, Arc<RawResponse>, FxBuildHasher>,
    metrics: CacheMetrics,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self {
            full: DashMap::with_hasher(FxBuildHasher::default()),
            partial: DashMap::with_hasher(FxBuildHasher::default()),
            metrics: CacheMetrics::default(),
        }
    }

    pub fn lookup_full(&self, query: &DnsQuery) -> Option<Arc<RawResponse>> {
        match self.full.get(&CacheKey::from(query)) {
            Some(entry) => {
                self.metrics.full_hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.metrics.full_misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    pub fn store_full(&self, query: &DnsQuery, response: Arc<RawResponse>) {
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
        self.full.insert(CacheKey::from(query), response);
    }

    pub fn lookup_partial(&self, zone: &Arc<str>, server: IpAddr) -> Option<Arc<RawResponse>> {
        self.partial
            .get(&ZoneKey::new(Arc::clone(zone), server))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Deepest cached zone cut above (or at) the target that `server` has
    /// already answered a referral for.
    pub fn lookup_deepest_partial(
        &self,
        labels: &LabelStack,
        server: IpAddr,
    ) -> Option<(Arc<str>, Arc<RawResponse>)> {
        let hit = labels.deepest_first().find_map(|zone| {
            self.lookup_partial(zone, server)
                .map(|response| (Arc::clone(zone), response))
        });

        match &hit {
            Some((zone, _)) => {
                self.metrics.partial_hits.fetch_add(1, AtomicOrdering::Relaxed);
                debug!(zone = %zone, server = %server, "Zone cut cache HIT");
            }
            None => {
                self.metrics.partial_misses.fetch_add(1, AtomicOrdering::Relaxed);
            }
        }
        hit
    }

    pub fn store_partial(&self, zone: Arc<str>, server: IpAddr, response: Arc<RawResponse>) {
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
        self.partial.insert(ZoneKey::new(zone, server), response);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            full_entries: self.full.len(),
            partial_entries: self.partial.len(),
            full_hits: self.metrics.full_hits.load(AtomicOrdering::Relaxed),
            full_misses: self.metrics.full_misses.load(AtomicOrdering::Relaxed),
            partial_hits: self.metrics.partial_hits.load(AtomicOrdering::Relaxed),
            partial_misses: self.metrics.partial_misses.load(AtomicOrdering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }

    pub fn len(&self) -> usize {
        self.full.len() + self.partial.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty() && self.partial.is_empty()
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_resolve_domain::{RecordData, RecordType, ResourceRecord, ResponseCode};

    fn referral(zone: &str) -> Arc<RawResponse> {
        Arc::new(RawResponse::new(
            ResponseCode::NoError,
            vec![],
            vec![ResourceRecord::new(
                zone,
                172800,
                RecordData::NS(Arc::from("ns1.example.net.")),
            )],
            vec![],
        ))
    }

    #[test]
    fn test_full_entries_are_keyed_by_name_and_type() {
        let cache = ResolutionCache::new();
        let query = DnsQuery::parse("example.com", RecordType::A).unwrap();
        cache.store_full(&query, referral("example.com."));

        assert!(cache.lookup_full(&query).is_some());
        assert!(cache
            .lookup_full(&DnsQuery::parse("example.com", RecordType::MX).unwrap())
            .is_none());

        let stats = cache.stats();
        assert_eq!(stats.full_entries, 1);
        assert_eq!(stats.full_hits, 1);
        assert_eq!(stats.full_misses, 1);
    }

    #[test]
    fn test_partial_entries_are_per_server() {
        let cache = ResolutionCache::new();
        let root: IpAddr = "198.41.0.4".parse().unwrap();
        let other: IpAddr = "199.9.14.201".parse().unwrap();
        cache.store_partial(Arc::from("com."), root, referral("com."));

        assert!(cache.lookup_partial(&Arc::from("com."), root).is_some());
        assert!(cache.lookup_partial(&Arc::from("com."), other).is_none());
    }

    #[test]
    fn test_deepest_zone_cut_wins() {
        let cache = ResolutionCache::new();
        let root: IpAddr = "198.41.0.4".parse().unwrap();
        cache.store_partial(Arc::from("com."), root, referral("com."));
        cache.store_partial(Arc::from("example.com."), root, referral("example.com."));

        let labels = LabelStack::new("www.example.com.");
        let (zone, _) = cache.lookup_deepest_partial(&labels, root).unwrap();
        assert_eq!(zone.as_ref(), "example.com.");

        let unrelated = LabelStack::new("example.org.");
        assert!(cache.lookup_deepest_partial(&unrelated, root).is_none());
        assert_eq!(cache.stats().partial_hits, 1);
        assert_eq!(cache.stats().partial_misses, 1);
    }
}
