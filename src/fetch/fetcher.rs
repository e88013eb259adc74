//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by the validator:
//! - Building the HTTP client with the declared user agent
//! - GET of robots.txt, with 404 told apart from other failures
//! - GET of the target page for meta tag and header inspection
//! - HEAD probes of common static resources

use crate::config::{FetchConfig, UserAgentConfig};
use crate::ValidatorError;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use url::Url;

const X_ROBOTS_TAG: &str = "x-robots-tag";

/// Paths probed by [`check_resources`], relative to the site origin
pub const RESOURCE_PROBES: [&str; 3] = ["/style.css", "/script.js", "/image.jpg"];

/// The parts of a fetched page the directive extractor needs
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// HTTP status code
    pub status_code: u16,

    /// Page body
    pub body: String,

    /// X-Robots-Tag header value; repeated headers are joined with ", "
    pub x_robots_tag: Option<String>,
}

/// Availability of common static resources on the site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceAvailability {
    pub css: bool,
    pub javascript: bool,
    pub images: bool,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `fetch` - Timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use robots_validator::config::ValidatorConfig;
/// use robots_validator::fetch::build_http_client;
///
/// let config = ValidatorConfig::default();
/// let client = build_http_client(&config.user_agent, &config.fetch).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetch: &FetchConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header.as_str())
        .timeout(Duration::from_secs(fetch.robots_timeout_secs))
        .connect_timeout(Duration::from_secs(fetch.robots_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches robots.txt as text
///
/// # Error Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | `Ok(body)` |
/// | HTTP 404 | `RobotsNotFound` |
/// | Other HTTP status | `FetchFailed` |
/// | DNS, timeout, connection refused, TLS | `FetchFailed` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `robots_url` - Absolute robots.txt URL
pub async fn fetch_robots_txt(client: &Client, robots_url: &Url) -> Result<String, ValidatorError> {
    let url = robots_url.to_string();

    let response = client
        .get(robots_url.clone())
        .send()
        .await
        .map_err(|e| ValidatorError::FetchFailed {
            url: url.clone(),
            reason: describe_error(&e),
        })?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ValidatorError::RobotsNotFound { url });
    }

    if !status.is_success() {
        return Err(ValidatorError::FetchFailed {
            url,
            reason: format!("HTTP {}", status.as_u16()),
        });
    }

    response
        .text()
        .await
        .map_err(|e| ValidatorError::FetchFailed {
            url,
            reason: describe_error(&e),
        })
}

/// Fetches the target page for directive inspection
///
/// Any failure is logged and reported as `None`; the validation carries on
/// with robots.txt alone. Non-2xx answers still count as fetched since their
/// headers may carry an X-Robots-Tag.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL
pub async fn fetch_page(client: &Client, url: &Url) -> Option<PageSnapshot> {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Failed to fetch page {}: {}", url, describe_error(&e));
            return None;
        }
    };

    let status_code = response.status().as_u16();
    let x_robots_tag = header_values(response.headers(), X_ROBOTS_TAG);

    match response.text().await {
        Ok(body) => Some(PageSnapshot {
            status_code,
            body,
            x_robots_tag,
        }),
        Err(e) => {
            tracing::warn!("Failed to read page body {}: {}", url, describe_error(&e));
            None
        }
    }
}

/// Probes `/style.css`, `/script.js` and `/image.jpg` on the origin
///
/// The three HEAD requests run concurrently, each bounded by `timeout`. A
/// resource counts as available only when it answers with a 2xx status.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `origin` - Site origin, e.g. "https://example.com"
/// * `timeout` - Per-request timeout
pub async fn check_resources(
    client: &Client,
    origin: &str,
    timeout: Duration,
) -> ResourceAvailability {
    let [css, javascript, images] = RESOURCE_PROBES;

    let (css, javascript, images) = tokio::join!(
        probe(client, origin, css, timeout),
        probe(client, origin, javascript, timeout),
        probe(client, origin, images, timeout),
    );

    ResourceAvailability {
        css,
        javascript,
        images,
    }
}

async fn probe(client: &Client, origin: &str, path: &str, timeout: Duration) -> bool {
    let url = format!("{}{}", origin, path);

    match client.head(&url).timeout(timeout).send().await {
        Ok(response) => {
            tracing::debug!("HEAD {} -> {}", url, response.status());
            response.status().is_success()
        }
        Err(e) => {
            tracing::debug!("HEAD {} failed: {}", url, describe_error(&e));
            false
        }
    }
}

/// Joins every value of a header; `None` if the header is absent
fn header_values(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// Classifies a transport error for logs and error messages
fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Connection refused".to_string()
    } else {
        e.to_string()
    }
}
