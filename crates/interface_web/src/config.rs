//! Web layer configuration

use serde::Deserialize;

/// Web layer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL of the upstream claims service
    pub upstream_base_url: String,
    /// Post-logout redirect target when the caller supplies none
    pub sign_out_redirect: String,
    /// Log level
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upstream_base_url: "http://localhost:3000".to_string(),
            sign_out_redirect: "/login".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from environment variables prefixed `CLAIMS_`
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = WebConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.sign_out_redirect, "/login");
    }
}
