pub mod config;
pub mod logging;
pub mod resolver;

pub use config::load_config;
pub use logging::init_logging;
pub use resolver::build_resolver;
