//! Configuration module for ferrous-resolve
//!
//! - `root`: Main configuration and CLI overrides
//! - `dns`: Iterative resolution settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;

pub use dns::{DnsConfig, RootOrder, VisitedScope};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
