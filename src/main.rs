//! Robots-Validator main entry point
//!
//! This is the command-line interface for the robots.txt validator.

use anyhow::Context;
use clap::Parser;
use robots_validator::config::{
    load_config_or_default, validate_agent_name, OutputFormat, ValidatorConfig, KNOWN_AGENTS,
};
use robots_validator::fetch::build_http_client;
use robots_validator::output::{render, write_report};
use robots_validator::robots::RobotsCache;
use robots_validator::{validate, ValidationRequest};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Robots-Validator: check whether a robot may crawl a URL
///
/// Fetches the site's robots.txt, extracts the rules for the given agent and
/// reports whether the URL's path is allowed. The page itself is fetched to
/// surface its meta robots tag and X-Robots-Tag header.
#[derive(Parser, Debug)]
#[command(name = "robots-validator")]
#[command(version = "1.0.0")]
#[command(about = "Check robots.txt rules and crawl directives for a URL", long_about = None)]
struct Cli {
    /// URLs to validate (scheme defaults to https)
    #[arg(value_name = "URL", required_unless_present = "list_agents")]
    urls: Vec<String>,

    /// Robot name to check (e.g. googlebot, bingbot, *)
    #[arg(short, long)]
    agent: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Probe CSS, JavaScript and image availability
    #[arg(short = 'r', long)]
    check_resources: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// List well-known robot names and exit
    #[arg(long)]
    list_agents: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if cli.list_agents {
        print_known_agents();
        return Ok(ExitCode::SUCCESS);
    }

    let config =
        load_config_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    let agent = cli
        .agent
        .clone()
        .unwrap_or_else(|| config.user_agent.default_agent.clone());
    validate_agent_name(&agent)?;

    handle_validate(&cli, &config, agent).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robots_validator=warn,warn"),
            1 => EnvFilter::new("robots_validator=info,warn"),
            2 => EnvFilter::new("robots_validator=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --list-agents mode
fn print_known_agents() {
    println!("Known robots:");
    for (agent, label) in KNOWN_AGENTS {
        println!("  {:<14} {}", agent, label);
    }
}

/// Validates every URL and writes the combined report
async fn handle_validate(
    cli: &Cli,
    config: &ValidatorConfig,
    agent: String,
) -> anyhow::Result<ExitCode> {
    let client = build_http_client(&config.user_agent, &config.fetch)
        .context("Failed to build HTTP client")?;
    let mut cache = RobotsCache::new();
    let check_resources = cli.check_resources || config.fetch.check_resources;

    let mut reports = Vec::with_capacity(cli.urls.len());
    let mut failures = 0usize;

    for url in &cli.urls {
        let request = ValidationRequest {
            url: url.clone(),
            user_agent: agent.clone(),
            check_resources,
        };

        match validate(&client, config, &request, &mut cache).await {
            Ok(report) => reports.push(report),
            Err(e) => {
                failures += 1;
                tracing::error!("Validation of {} failed: {:?}", url, e);
                eprintln!("{}: {}", url, e);
            }
        }
    }

    tracing::debug!("Fetched robots.txt for {} origin(s)", cache.len());

    if !reports.is_empty() {
        let format = cli.format.unwrap_or(config.output.format);
        let rendered = render(&reports, format)?;
        write_report(&rendered, cli.output.as_deref())?;
    }

    if failures > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
