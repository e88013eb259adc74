//! Markdown report generation
//!
//! This module renders a validation report as a markdown document with the
//! verdict, applicable rules, page directives and the raw robots.txt.

use crate::directives::ParsedCrawlDirectives;
use crate::output::describe_flags;
use crate::validate::ValidationReport;

/// Formats a validation report as markdown
///
/// # Arguments
///
/// * `report` - The validation report
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown(report: &ValidationReport) -> String {
    let mut md = String::new();

    // Title
    md.push_str(&format!("# Robots.txt Validation: {}\n\n", report.url));

    // Verdict
    md.push_str("## Result\n\n");
    md.push_str(&format!(
        "- **Status**: {}\n",
        if report.allowed { "Allowed" } else { "Blocked" }
    ));
    md.push_str(&format!("- **User Agent**: `{}`\n", report.user_agent));
    md.push_str(&format!("- **Path**: `{}`\n", report.path));
    md.push_str(&format!(
        "- **Longest-match verdict**: {}\n",
        if report.standard_allowed {
            "Allowed"
        } else {
            "Blocked"
        }
    ));
    md.push_str(&format!(
        "- **Checked**: {}\n\n",
        report.checked_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if report.verdicts_differ() {
        md.push_str(
            "> Allow rules take precedence over Disallow rules here regardless of length; \
             the robots.txt standard picks the longest matching rule instead.\n\n",
        );
    }

    // Rules
    md.push_str("## Applicable Rules\n\n");
    for rule in &report.rules {
        md.push_str(&format!("- `{}`\n", rule));
    }
    md.push('\n');

    // Page directives
    md.push_str("## Page Directives\n\n");
    if report.page_status.is_some() {
        md.push_str("| Source | Raw | Flags |\n");
        md.push_str("|--------|-----|-------|\n");
        md.push_str(&directive_row("Meta robots", report.meta_robots.as_ref()));
        md.push_str(&directive_row("X-Robots-Tag", report.x_robots_tag.as_ref()));
        md.push('\n');
    } else {
        md.push_str("_The page could not be fetched._\n\n");
    }

    // Resources
    if let Some(resources) = &report.resources {
        md.push_str("## Resources\n\n");
        md.push_str("| Resource | Available |\n");
        md.push_str("|----------|-----------|\n");
        md.push_str(&format!("| CSS | {} |\n", yes_no(resources.css)));
        md.push_str(&format!("| JavaScript | {} |\n", yes_no(resources.javascript)));
        md.push_str(&format!("| Images | {} |\n\n", yes_no(resources.images)));
    }

    // Raw robots.txt
    md.push_str("## robots.txt\n\n");
    md.push_str("```text\n");
    md.push_str(report.robots_txt_content.trim_end());
    md.push_str("\n```\n");

    md
}

fn directive_row(source: &str, directives: Option<&ParsedCrawlDirectives>) -> String {
    match directives {
        Some(directives) => format!(
            "| {} | `{}` | {} |\n",
            source,
            directives.raw,
            describe_flags(directives)
        ),
        None => format!("| {} | - | not present |\n", source),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
