//! Robots.txt directive parser
//!
//! This module turns raw robots.txt text into the ordered list of Allow and
//! Disallow rules that apply to one requested agent.

use serde::Serialize;
use std::fmt;

const USER_AGENT_PREFIX: &str = "user-agent:";
const DISALLOW_PREFIX: &str = "disallow:";
const ALLOW_PREFIX: &str = "allow:";

/// The wildcard agent name
pub const WILDCARD_AGENT: &str = "*";

/// Kind of a path rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    Allow,
    Disallow,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "Allow"),
            Self::Disallow => write!(f, "Disallow"),
        }
    }
}

/// A single Allow or Disallow rule
///
/// The path prefix is never empty: directive lines with no value are dropped
/// by [`extract_rules`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rule {
    /// Whether the rule allows or disallows
    pub kind: RuleKind,

    /// Literal path prefix the rule applies to
    pub path_prefix: String,
}

impl Rule {
    /// Creates an Allow rule
    pub fn allow(path_prefix: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Allow,
            path_prefix: path_prefix.into(),
        }
    }

    /// Creates a Disallow rule
    pub fn disallow(path_prefix: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Disallow,
            path_prefix: path_prefix.into(),
        }
    }

    /// Returns true if the rule's prefix is a literal prefix of `path`
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.path_prefix)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.path_prefix)
    }
}

/// Scanning state: whether the lines being read belong to a matching block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgentState {
    Matching,
    NotMatching,
}

impl AgentState {
    /// Decides the state for a `User-agent:` value
    fn for_agent(named: &str, requested: &str) -> Self {
        if named == requested || named == WILDCARD_AGENT {
            Self::Matching
        } else {
            Self::NotMatching
        }
    }
}

/// Extracts the rules that apply to `agent` from robots.txt content
///
/// # Scanning Rules
///
/// - Blank lines and `#` comments are skipped without touching the state
/// - Every `User-agent:` line re-decides whether following lines apply: they do
///   when the named agent equals `agent` (case-insensitive) or is `*`
/// - `Disallow:` and `Allow:` lines inside a matching block become rules when
///   their value is non-empty
/// - Any other line (Sitemap, Crawl-delay, garbage) is ignored
///
/// Rules from every matching block are collected, in file order. A document
/// with no applicable rules yields an empty vector.
///
/// # Arguments
///
/// * `document` - The raw robots.txt content
/// * `agent` - The robot name to resolve rules for
///
/// # Returns
///
/// The applicable rules in the order they appear in the file
///
/// # Example
///
/// ```
/// use robots_validator::robots::{extract_rules, Rule};
///
/// let doc = "User-agent: *\nDisallow: /private\nAllow: /private/public\n";
/// assert_eq!(
///     extract_rules(doc, "*"),
///     vec![Rule::disallow("/private"), Rule::allow("/private/public")]
/// );
/// ```
pub fn extract_rules(document: &str, agent: &str) -> Vec<Rule> {
    let requested = agent.trim().to_lowercase();
    let mut state = AgentState::NotMatching;
    let mut rules = Vec::new();

    for line in document.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(value) = strip_directive(trimmed, USER_AGENT_PREFIX) {
            state = AgentState::for_agent(&value.to_lowercase(), &requested);
            continue;
        }

        if state == AgentState::NotMatching {
            continue;
        }

        if let Some(value) = strip_directive(trimmed, DISALLOW_PREFIX) {
            if !value.is_empty() {
                rules.push(Rule::disallow(value));
            }
        } else if let Some(value) = strip_directive(trimmed, ALLOW_PREFIX) {
            if !value.is_empty() {
                rules.push(Rule::allow(value));
            }
        }
    }

    tracing::debug!(agent = %requested, count = rules.len(), "extracted robots.txt rules");
    rules
}

/// Returns the trimmed value after `prefix` if `line` starts with it
/// (ASCII case-insensitive)
fn strip_directive<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(line[prefix.len()..].trim())
    } else {
        None
    }
}
