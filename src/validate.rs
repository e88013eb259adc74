//! Validation orchestration
//!
//! Ties the fetch layer to the decision engine: fetch robots.txt, extract the
//! agent's rules, evaluate the path, then inspect the page's own directives.

use crate::config::ValidatorConfig;
use crate::directives::{
    extract_meta_robots, extract_x_robots_tag, parse_directives, ParsedCrawlDirectives,
};
use crate::fetch::{check_resources, fetch_page, fetch_robots_txt, ResourceAvailability};
use crate::robots::{display_rules, extract_rules, is_allowed, standard_is_allowed, RobotsCache};
use crate::url::{normalize_target, origin_key, request_path, robots_url};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// One URL/agent pair to validate
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// The URL as typed; a missing scheme defaults to https
    pub url: String,

    /// Robot name, e.g. "googlebot" or "*"
    pub user_agent: String,

    /// Whether to probe CSS/JS/image availability
    pub check_resources: bool,
}

/// Outcome of validating one URL for one agent
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// The normalized URL
    pub url: String,

    /// Robot name as requested
    pub user_agent: String,

    /// Path the rules were evaluated against
    pub path: String,

    /// Verdict under the Allow-dominates policy
    pub allowed: bool,

    /// Verdict under standard longest-match precedence, for comparison
    pub standard_allowed: bool,

    /// Applicable rules for display, or the "No specific rules found" sentinel
    pub rules: Vec<String>,

    /// Raw robots.txt text
    pub robots_txt_content: String,

    /// HTTP status of the page fetch; `None` if the page could not be fetched
    pub page_status: Option<u16>,

    /// Directives from the page's meta robots tag
    pub meta_robots: Option<ParsedCrawlDirectives>,

    /// Directives from the X-Robots-Tag response header
    pub x_robots_tag: Option<ParsedCrawlDirectives>,

    /// Static resource availability, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceAvailability>,

    /// When the validation ran
    pub checked_at: DateTime<Utc>,
}

impl ValidationReport {
    /// Returns true if either page-level source carries `noindex`
    ///
    /// This never affects [`ValidationReport::allowed`], which reflects
    /// robots.txt only.
    pub fn page_blocked(&self) -> bool {
        [&self.meta_robots, &self.x_robots_tag]
            .into_iter()
            .flatten()
            .any(|directives| directives.noindex)
    }

    /// Returns true if the simplified and standard verdicts disagree
    pub fn verdicts_differ(&self) -> bool {
        self.allowed != self.standard_allowed
    }
}

/// Validates one URL for one agent
///
/// # Flow
///
/// 1. Normalize the URL and derive the robots.txt location
/// 2. Fetch robots.txt (reusing `cache` for an origin already seen)
/// 3. Extract rules for the agent and evaluate the path
/// 4. Fetch the page and parse its meta tag and X-Robots-Tag header; a failed
///    page fetch leaves both as `None`
/// 5. Optionally probe static resources, concurrently with step 4
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - Validator configuration (resource probe timeout)
/// * `request` - URL, agent and options
/// * `cache` - Robots.txt text cache for this run
///
/// # Returns
///
/// * `Ok(ValidationReport)` - The verdict and supporting details
/// * `Err(ValidatorError)` - Invalid URL, or robots.txt could not be fetched
pub async fn validate(
    client: &Client,
    config: &ValidatorConfig,
    request: &ValidationRequest,
    cache: &mut RobotsCache,
) -> crate::Result<ValidationReport> {
    let target = normalize_target(&request.url)?;
    let origin = origin_key(&target);
    let path = request_path(&target).to_string();

    tracing::info!("Validating {} for agent '{}'", target, request.user_agent);

    let robots_txt_content = match cache.get(&origin) {
        Some(content) => {
            tracing::debug!("Using cached robots.txt for {}", origin);
            content.to_string()
        }
        None => {
            let content = fetch_robots_txt(client, &robots_url(&target)).await?;
            cache.insert(origin.clone(), content.clone());
            content
        }
    };

    let rules = extract_rules(&robots_txt_content, &request.user_agent);
    let allowed = is_allowed(&rules, &path);
    let standard_allowed =
        standard_is_allowed(&robots_txt_content, &request.user_agent, target.as_str());

    if allowed != standard_allowed {
        tracing::debug!(
            "Verdicts differ for {}: allow-dominates={}, longest-match={}",
            path,
            allowed,
            standard_allowed
        );
    }

    let resource_timeout = Duration::from_secs(config.fetch.resource_timeout_secs);
    let (page, resources) = tokio::join!(fetch_page(client, &target), async {
        if request.check_resources {
            Some(check_resources(client, &origin, resource_timeout).await)
        } else {
            None
        }
    });

    let (meta_robots, x_robots_tag) = match &page {
        Some(page) => (
            parse_directives(extract_meta_robots(&page.body).as_deref()),
            parse_directives(extract_x_robots_tag(page.x_robots_tag.as_deref()).as_deref()),
        ),
        None => (None, None),
    };

    tracing::info!(
        "{} is {} for '{}' ({} rules)",
        target,
        if allowed { "allowed" } else { "blocked" },
        request.user_agent,
        rules.len()
    );

    Ok(ValidationReport {
        url: target.to_string(),
        user_agent: request.user_agent.clone(),
        path,
        allowed,
        standard_allowed,
        rules: display_rules(&rules),
        robots_txt_content,
        page_status: page.as_ref().map(|page| page.status_code),
        meta_robots,
        x_robots_tag,
        resources,
        checked_at: Utc::now(),
    })
}
