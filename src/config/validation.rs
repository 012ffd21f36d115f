use crate::config::types::{FetchConfig, FetcherConfig};
use crate::ConfigError;

/// Upper bound for either timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &FetchConfig) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    validate_user_agent(&config.user_agent)?;

    if config.request_timeout_secs < 1 || config.request_timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "request_timeout must be between 1 and {} seconds, got {}",
            MAX_TIMEOUT_SECS, config.request_timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout must be >= 1 second, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.connect_timeout_secs > config.request_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout ({}s) cannot exceed request_timeout ({}s)",
            config.connect_timeout_secs, config.request_timeout_secs
        )));
    }

    Ok(())
}

/// A user agent must be usable as an HTTP header value
fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user_agent contains control characters: {:?}",
            user_agent
        )));
    }

    Ok(())
}
