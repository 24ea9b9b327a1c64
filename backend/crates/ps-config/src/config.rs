use crate::{ConfigError, ConfigErrorResult, ConfigOverrides, LoggingConfig, ServerConfig};

use std::path::Path;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Built-in defaults
    /// 2. TOML file at `path`, when given (missing file is an error)
    /// 3. Command line overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> ConfigErrorResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_toml(path)?,
            None => Config::default(),
        };

        config.apply_cli_overrides(overrides);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be empty"));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    pub fn apply_cli_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref host) = overrides.host {
            self.server.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(ref file) = overrides.log_file {
            self.logging.file = Some(file.clone());
        }
        if overrides.no_color {
            self.logging.colored = false;
        }
    }
}
