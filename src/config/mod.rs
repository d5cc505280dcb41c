use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default registration endpoint used when no override is configured.
const DEFAULT_ENDPOINT: &str = "https://api.hackathon.is/api/registration/";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Registration API endpoint
    pub endpoint: String,

    /// Event name shown in the page header
    pub event_name: String,

    /// Maximum number of team members accepted on the registration form
    pub max_team_members: usize,

    /// Seconds an error toast stays on screen before auto-hiding
    pub notification_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            event_name: "Hackathon Iași".to_string(),
            max_team_members: 6,
            notification_timeout: 10,
        }
    }
}

impl Config {
    /// Initialize configuration from defaults and environment variables
    pub fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();
        config.load_from_env();
        Ok(config)
    }

    /// Apply HACKREG_* environment overrides
    fn load_from_env(&mut self) {
        if let Ok(endpoint) = std::env::var("HACKREG_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(name) = std::env::var("HACKREG_EVENT_NAME") {
            self.event_name = name;
        }
        if let Ok(timeout) = std::env::var("HACKREG_NOTIFICATION_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.notification_timeout = secs;
            }
        }
    }

    /// Validate the configuration before starting the UI
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            anyhow::bail!("Registration endpoint must not be empty");
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("Registration endpoint must be an http(s) URL: {}", self.endpoint);
        }
        if self.max_team_members == 0 {
            anyhow::bail!("max_team_members must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_team_members, 6);
        assert_eq!(config.notification_timeout, 10);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.endpoint.clear();
        assert!(config.validate().is_err());
    }
}
