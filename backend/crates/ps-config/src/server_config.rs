use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (default: 127.0.0.1)
    pub host: String,
    /// Bind port (default: 5000, 0 = OS assigned)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Set the bind address
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host must not be empty"));
        }

        if self.host.chars().any(char::is_whitespace) {
            return Err(ConfigError::server(format!(
                "server.host must not contain whitespace, got {:?}",
                self.host
            )));
        }

        Ok(())
    }

    /// Get bind address as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
