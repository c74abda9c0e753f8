//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL. Unset selects the in-memory store.
    pub database_url: Option<String>,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("ROLODEX_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ROLODEX_SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            database_url: env::var("DATABASE_URL").ok(),
            log_level: env::var("ROLODEX_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
