use url::Url;

/// Returns the origin of a URL as `{scheme}://{host}[:{port}]`
///
/// Default ports are omitted, explicit non-default ports kept.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use robots_validator::url::origin_key;
///
/// let url = Url::parse("https://EXAMPLE.com/path?q=1").unwrap();
/// assert_eq!(origin_key(&url), "https://example.com");
///
/// let url = Url::parse("http://localhost:8080/").unwrap();
/// assert_eq!(origin_key(&url), "http://localhost:8080");
/// ```
pub fn origin_key(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    }
}

/// Returns the robots.txt URL for the site hosting `url`
///
/// # Examples
///
/// ```
/// use url::Url;
/// use robots_validator::url::robots_url;
///
/// let url = Url::parse("https://example.com/deep/page.html").unwrap();
/// assert_eq!(robots_url(&url).as_str(), "https://example.com/robots.txt");
/// ```
pub fn robots_url(url: &Url) -> Url {
    let mut robots = url.clone();
    robots.set_path("/robots.txt");
    robots.set_query(None);
    robots.set_fragment(None);
    // Credentials never belong in the robots.txt request
    let _ = robots.set_username("");
    let _ = robots.set_password(None);
    robots
}

/// Returns the path that rules are evaluated against
///
/// Query and fragment are not part of it.
pub fn request_path(url: &Url) -> &str {
    url.path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_simple() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(origin_key(&url), "https://example.com");
    }

    #[test]
    fn test_origin_default_port_dropped() {
        let url = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(origin_key(&url), "https://example.com");
    }

    #[test]
    fn test_origin_with_port() {
        let url = Url::parse("http://127.0.0.1:3000/a").unwrap();
        assert_eq!(origin_key(&url), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_robots_url_drops_query_and_fragment() {
        let url = Url::parse("https://example.com/page?x=1#top").unwrap();
        assert_eq!(robots_url(&url).as_str(), "https://example.com/robots.txt");
    }

    #[test]
    fn test_robots_url_keeps_port() {
        let url = Url::parse("http://127.0.0.1:3000/a/b").unwrap();
        assert_eq!(
            robots_url(&url).as_str(),
            "http://127.0.0.1:3000/robots.txt"
        );
    }

    #[test]
    fn test_robots_url_strips_credentials() {
        let url = Url::parse("https://user:pw@example.com/a").unwrap();
        assert_eq!(robots_url(&url).as_str(), "https://example.com/robots.txt");
    }

    #[test]
    fn test_request_path_excludes_query() {
        let url = Url::parse("https://example.com/search?q=1").unwrap();
        assert_eq!(request_path(&url), "/search");
    }

    #[test]
    fn test_request_path_root() {
        let url = Url::parse("https://example.com").unwrap();
        assert_eq!(request_path(&url), "/");
    }
}
