//! Host configuration.
//!
//! All configuration is loaded from environment variables with sensible
//! defaults, read once at startup.

use std::env;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint of the remote catalog service
    pub api_base: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base =
            env::var("MOVIES_API_BASE").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        let log_level = env::var("MOVIES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self { api_base, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        env::remove_var("MOVIES_API_BASE");
        env::remove_var("MOVIES_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.log_level, "info");
    }
}
