pub mod key;
pub mod metrics;
pub mod storage;

pub use key::{CacheKey, ZoneKey};
pub use metrics::{CacheMetrics, CacheStats};
pub use storage::ResolutionCache;
