use crate::UrlError;
use url::Url;

/// Turns user input into an absolute HTTP(S) URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prefix `https://` when the input carries no scheme
///    (e.g., "example.com/page")
/// 3. Parse the URL; reject if malformed
/// 4. Reject schemes other than HTTP and HTTPS
/// 5. Reject URLs without a host
///
/// Path, query and fragment are kept as given; the `url` crate already
/// lowercases the host.
///
/// # Arguments
///
/// * `input` - The URL as typed by the user
///
/// # Returns
///
/// * `Ok(Url)` - The absolute URL to validate
/// * `Err(UrlError)` - The input cannot be turned into an HTTP(S) URL
///
/// # Examples
///
/// ```
/// use robots_validator::url::normalize_target;
///
/// let url = normalize_target("Example.COM/page").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
///
/// let url = normalize_target("http://example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/");
/// ```
pub fn normalize_target(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Returns true if `input` starts with `<scheme>://`
fn has_scheme(input: &str) -> bool {
    input.split_once("://").map_or(false, |(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
