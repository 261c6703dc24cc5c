use super::dns::{DnsConfig, RootOrder};
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub verbose: bool,
    pub query_timeout_ms: Option<u64>,
    pub shuffle_roots: bool,
}

impl Config {
    /// Loads the file at `path` (defaults when `None`) and applies overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Config::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if overrides.verbose {
            self.logging.level = "debug".to_string();
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if overrides.shuffle_roots {
            self.resolver.root_order = RootOrder::Shuffled;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;

        if resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if resolver.port == 0 {
            return Err(ConfigError::Validation(
                "resolver.port must be greater than zero".to_string(),
            ));
        }
        if resolver.max_referral_depth == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_referral_depth must be greater than zero".to_string(),
            ));
        }
        if resolver.max_nameserver_lookup_depth == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_nameserver_lookup_depth must be greater than zero".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
