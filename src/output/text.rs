//! Terminal summary

use crate::directives::ParsedCrawlDirectives;
use crate::output::describe_flags;
use crate::validate::ValidationReport;
use std::fmt::Write;

/// Formats a report as a plain-text terminal summary
pub fn format_text(report: &ValidationReport) -> String {
    let mut out = String::new();

    let verdict = if report.allowed { "ALLOWED" } else { "BLOCKED" };
    let _ = writeln!(out, "{} {}", verdict, report.url);
    let _ = writeln!(out, "  User agent: {}", report.user_agent);
    let _ = writeln!(out, "  Path:       {}", report.path);

    if report.verdicts_differ() {
        let standard = if report.standard_allowed {
            "allowed"
        } else {
            "blocked"
        };
        let _ = writeln!(
            out,
            "  Note: under longest-match precedence this path would be {}",
            standard
        );
    }

    let _ = writeln!(out, "\n  Rules:");
    for rule in &report.rules {
        let _ = writeln!(out, "    {}", rule);
    }

    let _ = writeln!(out, "\n  Page directives:");
    match report.page_status {
        Some(status) => {
            write_directives(&mut out, "Meta robots", report.meta_robots.as_ref());
            write_directives(&mut out, "X-Robots-Tag", report.x_robots_tag.as_ref());
            let _ = writeln!(out, "    (page answered HTTP {})", status);
        }
        None => {
            let _ = writeln!(out, "    page could not be fetched");
        }
    }

    if report.page_blocked() {
        let _ = writeln!(out, "  ! The page asks not to be indexed (noindex)");
    }

    if let Some(resources) = &report.resources {
        let _ = writeln!(out, "\n  Resources:");
        let _ = writeln!(out, "    CSS:        {}", availability(resources.css));
        let _ = writeln!(out, "    JavaScript: {}", availability(resources.javascript));
        let _ = writeln!(out, "    Images:     {}", availability(resources.images));
    }

    out
}

fn write_directives(out: &mut String, label: &str, directives: Option<&ParsedCrawlDirectives>) {
    let _ = match directives {
        Some(directives) => writeln!(
            out,
            "    {:<13} \"{}\" -> {}",
            format!("{}:", label),
            directives.raw,
            describe_flags(directives)
        ),
        None => writeln!(out, "    {:<13} not present", format!("{}:", label)),
    };
}

fn availability(available: bool) -> &'static str {
    if available {
        "available"
    } else {
        "unavailable"
    }
}
