//! Robots.txt handling module
//!
//! This module provides the rule extraction and permission evaluation engine,
//! plus a small per-origin cache for fetched robots.txt text.

mod cache;
mod evaluator;
mod parser;

pub use cache::{CachedRobots, RobotsCache};
pub use evaluator::{is_allowed, standard_is_allowed};
pub use parser::{extract_rules, Rule, RuleKind, WILDCARD_AGENT};

/// Display sentinel used when no rule applies to the requested agent
pub const NO_RULES_SENTINEL: &str = "No specific rules found";

/// Formats rules for display, substituting the sentinel for an empty list
///
/// # Arguments
///
/// * `rules` - Rules produced by [`extract_rules`]
///
/// # Returns
///
/// One line per rule (e.g., "Disallow: /private"), or a single
/// "No specific rules found" entry
pub fn display_rules(rules: &[Rule]) -> Vec<String> {
    if rules.is_empty() {
        return vec![NO_RULES_SENTINEL.to_string()];
    }

    rules.iter().map(Rule::to_string).collect()
}

/// Checks a path against robots.txt content for an agent
///
/// Convenience wrapper chaining [`extract_rules`] and [`is_allowed`].
pub fn check(document: &str, agent: &str, path: &str) -> bool {
    is_allowed(&extract_rules(document, agent), path)
}
