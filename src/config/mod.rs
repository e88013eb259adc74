//! Configuration module for Robots-Validator
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section and key has a default.
//!
//! # Example
//!
//! ```no_run
//! use robots_validator::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("validator.toml")).unwrap();
//! println!("Robots timeout: {}s", config.fetch.robots_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    FetchConfig, OutputConfig, OutputFormat, UserAgentConfig, ValidatorConfig, DEFAULT_AGENT,
    DEFAULT_USER_AGENT_HEADER, KNOWN_AGENTS,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate_agent_name;
