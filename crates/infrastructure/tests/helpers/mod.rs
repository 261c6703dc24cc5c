pub mod dns_server_mock;
pub mod stub_name_servers;

pub use dns_server_mock::*;
pub use stub_name_servers::*;
