//! Iterative resolution engine
//!
//! Walks the delegation tree from the root servers down:
//!
//! - **Root servers**: fixed entry points for every top-level query
//! - **Descent**: depth-first walk over servers for one query
//! - **Referral**: next hop from glue, or from a nested lookup of the
//!   name server's own address
//! - **Iterative**: entry point, root iteration, alias chasing, full-query cache
//!
//! ## Example Usage
//!
//! ```no_run
//! use ferrous_resolve_infrastructure::dns::client::UdpNameServerClient;
//! use ferrous_resolve_infrastructure::dns::resolver::ResolverBuilder;
//! use std::sync::Arc;
//!
//! let resolver = ResolverBuilder::new(Arc::new(UdpNameServerClient::new())).build();
//! ```

pub mod attempt;
pub mod builder;
pub mod config;
pub mod descent;
pub mod iterative;
pub mod referral;
pub mod root_servers;

pub use attempt::ResolutionAttempt;
pub use builder::ResolverBuilder;
pub use config::ResolverConfig;
pub use iterative::IterativeResolver;
pub use root_servers::{RootServerSet, ROOT_SERVERS};
