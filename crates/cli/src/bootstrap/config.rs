use ferrous_resolve_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after the subscriber is up, which needs the config first.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        roots = config.resolver.root_servers.len(),
        port = config.resolver.port,
        timeout_ms = config.resolver.query_timeout_ms,
        root_order = ?config.resolver.root_order,
        visited_scope = ?config.resolver.visited_scope,
        "Configuration loaded"
    );
}
