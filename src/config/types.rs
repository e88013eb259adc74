use serde::Deserialize;
use std::fmt;

/// User-Agent header the validator sends by default
pub const DEFAULT_USER_AGENT_HEADER: &str = "Mozilla/5.0 (compatible; RobotsTxtValidator/1.0)";

/// Robot checked when none is given
pub const DEFAULT_AGENT: &str = "googlebot";

/// Well-known crawler agents and their display labels
pub const KNOWN_AGENTS: &[(&str, &str)] = &[
    ("googlebot", "Googlebot"),
    ("bingbot", "Bingbot"),
    ("slurp", "Yahoo Slurp"),
    ("duckduckbot", "DuckDuckBot"),
    ("baiduspider", "Baidu Spider"),
    ("yandexbot", "Yandex Bot"),
    ("*", "All Robots (*)"),
];

/// Main configuration structure for Robots-Validator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidatorConfig {
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// User agent configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// User-Agent header sent with every request
    #[serde(default = "default_header")]
    pub header: String,

    /// Robot name evaluated when none is given on the command line
    #[serde(rename = "default-agent", default = "default_agent")]
    pub default_agent: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            default_agent: default_agent(),
        }
    }
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Timeout for the robots.txt and page requests (seconds)
    #[serde(rename = "robots-timeout-secs", default = "default_robots_timeout")]
    pub robots_timeout_secs: u64,

    /// Timeout for each resource probe (seconds)
    #[serde(rename = "resource-timeout-secs", default = "default_resource_timeout")]
    pub resource_timeout_secs: u64,

    /// Probe CSS/JS/image availability unless overridden on the command line
    #[serde(rename = "check-resources", default)]
    pub check_resources: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            robots_timeout_secs: default_robots_timeout(),
            resource_timeout_secs: default_resource_timeout(),
            check_resources: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Report rendering format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn default_header() -> String {
    DEFAULT_USER_AGENT_HEADER.to_string()
}

fn default_agent() -> String {
    DEFAULT_AGENT.to_string()
}

fn default_robots_timeout() -> u64 {
    10
}

fn default_resource_timeout() -> u64 {
    5
}
