use robots_validator::config::{ValidatorConfig, DEFAULT_USER_AGENT_HEADER};
use robots_validator::fetch::build_http_client;
use robots_validator::robots::RobotsCache;
use robots_validator::{validate, ValidationRequest, ValidatorError};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MIXED_ROBOTS: &str = "User-agent: *\nDisallow: /private\nAllow: /private/public\n";

fn request(url: String, agent: &str) -> ValidationRequest {
    ValidationRequest {
        url,
        user_agent: agent.to_string(),
        check_resources: false,
    }
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn run(
    config: &ValidatorConfig,
    request: &ValidationRequest,
) -> Result<robots_validator::ValidationReport, ValidatorError> {
    let client = build_http_client(&config.user_agent, &config.fetch).expect("client builds");
    let mut cache = RobotsCache::new();
    validate(&client, config, request, &mut cache).await
}

#[tokio::test]
async fn test_allowed_path_with_page_directives() {
    let server = MockServer::start().await;
    mount_robots(&server, MIXED_ROBOTS).await;

    Mock::given(method("GET"))
        .and(path("/private/public/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .insert_header("x-robots-tag", "noarchive")
                .set_body_string(
                    r#"<html><head><meta name="robots" content="noindex, nofollow"></head></html>"#,
                ),
        )
        .mount(&server)
        .await;

    let config = ValidatorConfig::default();
    let url = format!("{}/private/public/page", server.uri());
    let report = run(&config, &request(url.clone(), "*")).await.unwrap();

    assert_eq!(report.url, url);
    assert_eq!(report.path, "/private/public/page");
    assert!(report.allowed);
    assert_eq!(
        report.rules,
        vec!["Disallow: /private", "Allow: /private/public"]
    );
    assert_eq!(report.robots_txt_content, MIXED_ROBOTS);
    assert_eq!(report.page_status, Some(200));

    let meta = report.meta_robots.as_ref().expect("meta robots present");
    assert!(meta.noindex && meta.nofollow);
    assert_eq!(meta.raw, "noindex, nofollow");

    let header = report.x_robots_tag.as_ref().expect("header present");
    assert!(header.noarchive);
    assert!(!header.noindex);

    assert!(report.page_blocked());
    assert!(report.resources.is_none());
}

#[tokio::test]
async fn test_blocked_path() {
    let server = MockServer::start().await;
    mount_robots(&server, MIXED_ROBOTS).await;

    let config = ValidatorConfig::default();
    let url = format!("{}/private/secret", server.uri());
    let report = run(&config, &request(url, "googlebot")).await.unwrap();

    assert!(!report.allowed);
    // Unmatched page falls through to wiremock's 404; no directives found
    assert_eq!(report.page_status, Some(404));
    assert!(report.meta_robots.is_none());
    assert!(report.x_robots_tag.is_none());
}

#[tokio::test]
async fn test_other_agent_block_is_ignored() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: bingbot\nDisallow: /\n").await;

    let config = ValidatorConfig::default();
    let url = format!("{}/anything", server.uri());
    let report = run(&config, &request(url, "googlebot")).await.unwrap();

    assert!(report.allowed);
    assert!(report.standard_allowed);
    assert_eq!(report.rules, vec!["No specific rules found"]);
}

#[tokio::test]
async fn test_simplified_and_standard_verdicts_reported() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nAllow: /\nDisallow: /admin\n").await;

    let config = ValidatorConfig::default();
    let url = format!("{}/admin/panel", server.uri());
    let report = run(&config, &request(url, "testbot")).await.unwrap();

    assert!(report.allowed);
    assert!(!report.standard_allowed);
    assert!(report.verdicts_differ());
}

#[tokio::test]
async fn test_robots_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = ValidatorConfig::default();
    let err = run(&config, &request(server.uri(), "googlebot"))
        .await
        .unwrap_err();

    assert!(matches!(err, ValidatorError::RobotsNotFound { .. }));
    assert_eq!(err.to_string(), "robots.txt not found for this domain");
}

#[tokio::test]
async fn test_robots_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = ValidatorConfig::default();
    let err = run(&config, &request(server.uri(), "googlebot"))
        .await
        .unwrap_err();

    match err {
        ValidatorError::FetchFailed { reason, .. } => assert_eq!(reason, "HTTP 503"),
        other => panic!("expected FetchFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host() {
    let config = ValidatorConfig::default();
    let err = run(&config, &request("http://127.0.0.1:1/".to_string(), "googlebot"))
        .await
        .unwrap_err();

    assert!(matches!(err, ValidatorError::FetchFailed { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to fetch robots.txt. The domain may not exist or is not accessible."
    );
}

#[tokio::test]
async fn test_invalid_url() {
    let config = ValidatorConfig::default();
    let err = run(&config, &request("ftp://example.com".to_string(), "googlebot"))
        .await
        .unwrap_err();

    assert!(matches!(err, ValidatorError::Url(_)));
}

#[tokio::test]
async fn test_page_timeout_downgrades_to_none() {
    let server = MockServer::start().await;
    mount_robots(&server, MIXED_ROBOTS).await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-robots-tag", "noindex")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = ValidatorConfig::default();
    config.fetch.robots_timeout_secs = 1;
    let url = format!("{}/slow", server.uri());
    let report = run(&config, &request(url, "*")).await.unwrap();

    assert!(report.allowed);
    assert_eq!(report.page_status, None);
    assert!(report.meta_robots.is_none());
    assert!(report.x_robots_tag.is_none());
}

#[tokio::test]
async fn test_declared_user_agent_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header("user-agent", DEFAULT_USER_AGENT_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /"))
        .expect(1)
        .mount(&server)
        .await;

    let config = ValidatorConfig::default();
    let report = run(&config, &request(server.uri(), "googlebot"))
        .await
        .unwrap();

    assert!(!report.allowed);
}

#[tokio::test]
async fn test_check_resources() {
    let server = MockServer::start().await;
    mount_robots(&server, "").await;

    Mock::given(method("HEAD"))
        .and(path("/style.css"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/image.jpg"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let config = ValidatorConfig::default();
    let mut req = request(server.uri(), "googlebot");
    req.check_resources = true;
    let report = run(&config, &req).await.unwrap();

    let resources = report.resources.expect("resources requested");
    assert!(resources.css);
    assert!(!resources.javascript);
    assert!(resources.images);
}

#[tokio::test]
async fn test_robots_fetched_once_per_origin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MIXED_ROBOTS))
        .expect(1)
        .mount(&server)
        .await;

    let config = ValidatorConfig::default();
    let client = build_http_client(&config.user_agent, &config.fetch).unwrap();
    let mut cache = RobotsCache::new();

    let first = validate(
        &client,
        &config,
        &request(format!("{}/private/a", server.uri()), "*"),
        &mut cache,
    )
    .await
    .unwrap();
    let second = validate(
        &client,
        &config,
        &request(format!("{}/private/public/b", server.uri()), "*"),
        &mut cache,
    )
    .await
    .unwrap();

    assert!(!first.allowed);
    assert!(second.allowed);
    assert_eq!(cache.len(), 1);
}
