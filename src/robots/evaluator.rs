//! Permission evaluation over extracted rules
//!
//! # Precedence
//!
//! [`is_allowed`] uses a simplified policy: if *any* Allow rule matches, the
//! path is allowed, no matter how specific a matching Disallow rule is or where
//! it appears in the file. This is not the longest-match precedence of the
//! robots.txt standard (RFC 9309). Keep it as is; the standard verdict is
//! computed separately by [`standard_is_allowed`] and reported next to it.

use crate::robots::parser::{Rule, RuleKind};
use robotstxt::DefaultMatcher;

/// Decides whether `path` may be crawled under `rules`
///
/// 1. Any Allow rule whose prefix is a literal prefix of `path` → allowed
/// 2. Otherwise any matching Disallow rule → disallowed
/// 3. Otherwise → allowed (default-allow)
///
/// Matching is a plain string prefix test: no `*` expansion and no `$` anchor.
///
/// # Arguments
///
/// * `rules` - Rules produced by [`crate::robots::extract_rules`]
/// * `path` - The request path (e.g., "/private/page")
///
/// # Returns
///
/// * `true` - If the path is allowed
/// * `false` - If the path is disallowed
///
/// # Example
///
/// ```
/// use robots_validator::robots::{is_allowed, Rule};
///
/// let rules = vec![Rule::disallow("/private/secret"), Rule::allow("/private")];
/// // Allow wins even though the Disallow rule is longer
/// assert!(is_allowed(&rules, "/private/secret/file"));
/// ```
pub fn is_allowed(rules: &[Rule], path: &str) -> bool {
    let (allow, disallow): (Vec<&Rule>, Vec<&Rule>) =
        rules.iter().partition(|rule| rule.kind == RuleKind::Allow);

    if let Some(rule) = allow.iter().find(|rule| rule.matches(path)) {
        tracing::trace!(%rule, path, "allow rule matched");
        return true;
    }

    if let Some(rule) = disallow.iter().find(|rule| rule.matches(path)) {
        tracing::trace!(%rule, path, "disallow rule matched");
        return false;
    }

    true
}

/// Decides permission with standard longest-match semantics
///
/// Delegates to the `robotstxt` crate (a port of Google's reference matcher),
/// which honours wildcards, `$` anchors and rule specificity.
///
/// # Arguments
///
/// * `document` - The raw robots.txt content
/// * `agent` - The robot name
/// * `url` - The full URL being checked
pub fn standard_is_allowed(document: &str, agent: &str, url: &str) -> bool {
    if document.trim().is_empty() {
        return true;
    }

    let mut matcher = DefaultMatcher::default();
    matcher.one_agent_allowed_by_robots(document, agent, url)
}
