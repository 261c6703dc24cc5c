pub mod cache;
pub mod client;
pub mod codec;
pub mod resolver;
pub mod transport;

pub use cache::{CacheStats, ResolutionCache};
pub use client::UdpNameServerClient;
pub use resolver::{IterativeResolver, ResolverBuilder, ResolverConfig, RootServerSet};
