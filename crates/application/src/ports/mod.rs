pub mod dns_resolver;
pub mod name_server_client;

pub use dns_resolver::DnsResolver;
pub use name_server_client::NameServerClient;
