//! Page-level crawl directives
//!
//! This module extracts directive strings from the two page-level sources
//! (the HTML meta robots tag and the X-Robots-Tag response header) and
//! decomposes them into flags with one shared function.

mod meta;

pub use meta::extract_meta_robots;

use serde::Serialize;

/// Flags decoded from a crawl directive string such as "noindex, nofollow"
///
/// Flags are independent; any combination may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCrawlDirectives {
    pub noindex: bool,
    pub nofollow: bool,
    pub noarchive: bool,
    pub nosnippet: bool,
    pub noimageindex: bool,

    /// The directive string exactly as found
    pub raw: String,
}

impl ParsedCrawlDirectives {
    /// Names of the flags that are set, in declaration order
    pub fn active_flags(&self) -> Vec<&'static str> {
        [
            ("noindex", self.noindex),
            ("nofollow", self.nofollow),
            ("noarchive", self.noarchive),
            ("nosnippet", self.nosnippet),
            ("noimageindex", self.noimageindex),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

/// Returns the X-Robots-Tag header value unchanged
///
/// Mirrors [`extract_meta_robots`] so both sources go through the same
/// extract-then-parse pipeline.
pub fn extract_x_robots_tag(header: Option<&str>) -> Option<String> {
    header.map(str::to_string)
}

/// Decomposes a directive string into flags
///
/// The string is lowercased, split on commas, and each token trimmed. Each
/// flag is set when its exact token is present; unknown tokens are ignored.
///
/// # Arguments
///
/// * `raw` - The directive string, or `None` when the source was absent
///
/// # Returns
///
/// * `Some(ParsedCrawlDirectives)` - The decoded flags and the raw string
/// * `None` - If `raw` is `None`
///
/// # Example
///
/// ```
/// use robots_validator::directives::parse_directives;
///
/// let parsed = parse_directives(Some("NOINDEX, NoFollow")).unwrap();
/// assert!(parsed.noindex && parsed.nofollow);
/// assert!(!parsed.noarchive);
/// assert_eq!(parsed.raw, "NOINDEX, NoFollow");
/// ```
pub fn parse_directives(raw: Option<&str>) -> Option<ParsedCrawlDirectives> {
    let raw = raw?;
    let lowered = raw.to_lowercase();
    let tokens: Vec<&str> = lowered.split(',').map(str::trim).collect();
    let has = |token: &str| tokens.contains(&token);

    Some(ParsedCrawlDirectives {
        noindex: has("noindex"),
        nofollow: has("nofollow"),
        noarchive: has("noarchive"),
        nosnippet: has("nosnippet"),
        noimageindex: has("noimageindex"),
        raw: raw.to_string(),
    })
}
