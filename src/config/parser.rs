use crate::config::types::ValidatorConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(ValidatorConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use robots_validator::config::load_config;
///
/// let config = load_config(Path::new("validator.toml")).unwrap();
/// println!("Default agent: {}", config.user_agent.default_agent);
/// ```
pub fn load_config(path: &Path) -> Result<ValidatorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<ValidatorConfig, ConfigError> {
    let config: ValidatorConfig = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the configuration at `path`, or the defaults when no path is given
pub fn load_config_or_default(path: Option<&Path>) -> Result<ValidatorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ValidatorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[user-agent]
header = "TestValidator/2.0"
default-agent = "bingbot"

[fetch]
robots-timeout-secs = 20
resource-timeout-secs = 3
check-resources = true

[output]
format = "json"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.user_agent.header, "TestValidator/2.0");
        assert_eq!(config.user_agent.default_agent, "bingbot");
        assert_eq!(config.fetch.robots_timeout_secs, 20);
        assert_eq!(config.fetch.resource_timeout_secs, 3);
        assert!(config.fetch.check_resources);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.user_agent.header,
            "Mozilla/5.0 (compatible; RobotsTxtValidator/1.0)"
        );
        assert_eq!(config.user_agent.default_agent, "googlebot");
        assert_eq!(config.fetch.robots_timeout_secs, 10);
        assert_eq!(config.fetch.resource_timeout_secs, 5);
        assert!(!config.fetch.check_resources);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let config = parse_config("[fetch]\ncheck-resources = true\n").unwrap();
        assert!(config.fetch.check_resources);
        assert_eq!(config.fetch.robots_timeout_secs, 10);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/validator.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = parse_config("[output]\nformat = \"yaml\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let result = parse_config("[fetch]\nrobots-timeout-secs = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_config_or_default() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.user_agent.default_agent, "googlebot");
    }
}
