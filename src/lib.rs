//! Robots-Validator: robots.txt and crawl directive checker
//!
//! This crate decides whether a URL may be crawled by a named robot under the
//! rules published in the site's robots.txt, and surfaces page-level crawl
//! directives (meta robots tag, X-Robots-Tag header).
//!
//! The decision engine lives in [`robots`] and [`directives`] and is made of
//! pure functions over text. The remaining modules fetch that text, assemble a
//! [`validate::ValidationReport`] and render it.

pub mod config;
pub mod directives;
pub mod fetch;
pub mod output;
pub mod robots;
pub mod url;
pub mod validate;

use thiserror::Error;

/// Main error type for Robots-Validator operations
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("robots.txt not found for this domain")]
    RobotsNotFound { url: String },

    #[error("Failed to fetch robots.txt. The domain may not exist or is not accessible.")]
    FetchFailed { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Robots-Validator operations
pub type Result<T> = std::result::Result<T, ValidatorError>;

// Re-export commonly used types
pub use config::ValidatorConfig;
pub use directives::{
    extract_meta_robots, extract_x_robots_tag, parse_directives, ParsedCrawlDirectives,
};
pub use robots::{extract_rules, is_allowed, Rule, RuleKind};
pub use validate::{validate, ValidationReport, ValidationRequest};
