use log::Level;
use thiserror::Error;

const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("The contact form is not configured yet. Please reach us by phone or email.")]
    MissingAccessKey,
}

/// Where contact submissions go and which relay inbox receives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl RelayConfig {
    pub fn new(endpoint: impl Into<String>, access_key: Option<&str>) -> Result<Self, ConfigError> {
        let access_key = access_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingAccessKey)?;

        Ok(Self {
            endpoint: endpoint.into(),
            access_key: access_key.to_string(),
        })
    }
}

pub fn relay_endpoint() -> &'static str {
    option_env!("RELAY_ENDPOINT").unwrap_or(DEFAULT_RELAY_ENDPOINT)
}

/// Reads the relay credential baked in at build time from `RELAY_ACCESS_KEY`.
pub fn relay_config() -> Result<RelayConfig, ConfigError> {
    RelayConfig::new(relay_endpoint(), option_env!("RELAY_ACCESS_KEY"))
}

/// Console log level for every build profile.
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_key_is_trimmed() {
        let config = RelayConfig::new("https://relay.test/submit", Some("  abc-123 ")).unwrap();
        assert_eq!(config.access_key, "abc-123");
        assert_eq!(config.endpoint, "https://relay.test/submit");
    }

    #[test]
    fn logs_at_info() {
        assert_eq!(log_level(), Level::Info);
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert_eq!(
            RelayConfig::new(DEFAULT_RELAY_ENDPOINT, None),
            Err(ConfigError::MissingAccessKey)
        );
        assert_eq!(
            RelayConfig::new(DEFAULT_RELAY_ENDPOINT, Some("   ")),
            Err(ConfigError::MissingAccessKey)
        );
    }
}
