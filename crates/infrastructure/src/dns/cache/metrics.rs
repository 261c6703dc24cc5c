use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

#[derive(Default)]
pub struct CacheMetrics {
    pub full_hits: AtomicU64,
    pub full_misses: AtomicU64,
    pub partial_hits: AtomicU64,
    pub partial_misses: AtomicU64,
    pub insertions: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = (self.full_hits.load(AtomicOrdering::Relaxed)
            + self.partial_hits.load(AtomicOrdering::Relaxed)) as f64;
        let total = hits
            + (self.full_misses.load(AtomicOrdering::Relaxed)
                + self.partial_misses.load(AtomicOrdering::Relaxed)) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}

/// Point-in-time snapshot for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStats {
    pub full_entries: usize,
    pub partial_entries: usize,
    pub full_hits: u64,
    pub full_misses: u64,
    pub partial_hits: u64,
    pub partial_misses: u64,
    pub hit_rate: f64,
}
