use crate::config::types::{FetchConfig, UserAgentConfig, ValidatorConfig};
use crate::ConfigError;

const MAX_TIMEOUT_SECS: u64 = 120;

/// Validates the entire configuration
pub fn validate(config: &ValidatorConfig) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.header.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent header cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII or spaces
    if !config.header.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
        return Err(ConfigError::Validation(format!(
            "user-agent header contains invalid characters: '{}'",
            config.header
        )));
    }

    validate_agent_name(&config.default_agent)?;

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    validate_timeout("robots-timeout-secs", config.robots_timeout_secs)?;
    validate_timeout("resource-timeout-secs", config.resource_timeout_secs)?;
    Ok(())
}

fn validate_timeout(name: &str, secs: u64) -> Result<(), ConfigError> {
    if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(())
}

/// Validates a robot name: non-empty, no whitespace
pub fn validate_agent_name(agent: &str) -> Result<(), ConfigError> {
    if agent.is_empty() {
        return Err(ConfigError::Validation(
            "agent name cannot be empty".to_string(),
        ));
    }

    if agent.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "agent name cannot contain whitespace, got '{}'",
            agent
        )));
    }

    Ok(())
}
