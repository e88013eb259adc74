//! Meta robots tag extraction
//!
//! This is a textual scan, not an HTML parse. It only recognises tags written
//! with `name` before `content`; other attribute orders are not found.

use once_cell::sync::Lazy;
use regex::Regex;

static META_ROBOTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+name\s*=\s*["']robots["']\s+content\s*=\s*["']([^"']*)["']"#)
        .expect("meta robots pattern is valid")
});

/// Extracts the `content` of the first `<meta name="robots" ...>` tag
///
/// # Arguments
///
/// * `html` - The page body
///
/// # Returns
///
/// * `Some(String)` - The content attribute, verbatim
/// * `None` - If no matching tag was found
///
/// # Example
///
/// ```
/// use robots_validator::directives::extract_meta_robots;
///
/// let html = r#"<meta name="robots" content="noindex, nofollow">"#;
/// assert_eq!(extract_meta_robots(html), Some("noindex, nofollow".to_string()));
/// ```
pub fn extract_meta_robots(html: &str) -> Option<String> {
    META_ROBOTS
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
