//! ferrous-resolve domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod label_stack;
pub mod validators;
pub mod visited_set;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, RootOrder, VisitedScope};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use dns_response::{RawResponse, ResponseCode, ResponseKind};
pub use errors::DomainError;
pub use label_stack::LabelStack;
pub use validators::{is_within_zone, normalize_name};
pub use visited_set::VisitedSet;
