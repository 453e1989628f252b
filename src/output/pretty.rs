//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes: per-check
//! statuses in the fixed run order, a consolidated error block, a
//! consolidated warning block, and a one-line summary.

use crate::finding::{Severity, ValidationReport, ValidationStatus};
use colored::Colorize;

/// Formats a [`ValidationReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — bundle name, target path, timestamp.
/// 2. **Checks** — per-check pass/warn/fail/skip status.
/// 3. **Errors** — every error finding, in the order checks ran.
/// 4. **Warnings** — every warning finding, same ordering.
/// 5. **Summary** — overall result and severity counts, with distinct
///    framing for a clean pass versus a pass with warnings.
pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Skill Validation: {}  ", report.bundle)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Target: {}\n", report.target.display()));
    out.push_str(&format!("  Timestamp: {}\n\n", report.timestamp));

    // Check results summary
    out.push_str(&format!("{}\n", "Checks".bold().underline()));
    for result in &report.check_results {
        let icon = if result.skipped {
            "SKIP".dimmed().to_string()
        } else {
            // Single pass: determine both flags simultaneously instead of
            // two separate iter().any() calls over the same findings Vec.
            let (has_err, has_warn) =
                result
                    .findings
                    .iter()
                    .fold((false, false), |(e, w), f| match f.severity {
                        Severity::Error => (true, w),
                        Severity::Warning => (e, true),
                    });
            if has_err {
                "FAIL".red().bold().to_string()
            } else if has_warn {
                "WARN".yellow().bold().to_string()
            } else {
                "PASS".green().bold().to_string()
            }
        };

        let detail = if result.skipped {
            result
                .skip_reason
                .as_deref()
                .unwrap_or("skipped")
                .dimmed()
                .to_string()
        } else if result.findings.is_empty() {
            "ok".dimmed().to_string()
        } else {
            format!("{} findings", result.findings.len())
        };

        out.push_str(&format!(
            "  [{icon}] {name:<14} {detail}\n",
            name = result.check_name,
        ));
    }
    out.push('\n');

    push_findings_block(&mut out, report, Severity::Error, "Errors");
    push_findings_block(&mut out, report, Severity::Warning, "Warnings");

    // Summary
    let status_str = match report.status {
        ValidationStatus::Passed => "PASSED".green().bold().to_string(),
        ValidationStatus::Warning => "PASSED".yellow().bold().to_string(),
        ValidationStatus::Failed => "FAILED".red().bold().to_string(),
    };

    let (errors, warnings) = report.count_by_severity();
    let framing = match report.status {
        ValidationStatus::Passed => "all validation checks passed".to_string(),
        ValidationStatus::Warning => format!("passed with {warnings} warnings"),
        ValidationStatus::Failed => format!("{errors} errors, {warnings} warnings"),
    };
    out.push_str(&format!("Result: {status_str}  |  {framing}\n"));

    out
}

/// Appends one severity block, preserving the order checks ran in.
///
/// Uses a peekable iterator to avoid allocating an intermediate Vec just
/// to check emptiness before the single iteration.
fn push_findings_block(
    out: &mut String,
    report: &ValidationReport,
    severity: Severity,
    title: &str,
) {
    let mut iter = report
        .findings
        .iter()
        .filter(|f| f.severity == severity)
        .peekable();
    if iter.peek().is_none() {
        return;
    }

    out.push_str(&format!("{}\n", title.bold().underline()));
    for finding in iter {
        let marker = match finding.severity {
            Severity::Error => "✗".red().bold().to_string(),
            Severity::Warning => "⚠".yellow().bold().to_string(),
        };

        let mut lines = finding.message.lines();
        let first = lines.next().unwrap_or("");
        out.push_str(&format!(
            "  {marker} [{rule}] {first}\n",
            rule = finding.rule_id.dimmed(),
        ));
        for line in lines {
            out.push_str(&format!("      {}\n", line.dimmed()));
        }
        if let Some(ref remediation) = finding.remediation {
            let mut rem_lines = remediation.lines();
            if let Some(first_rem) = rem_lines.next() {
                out.push_str(&format!("      {}\n", format!("fix: {first_rem}").dimmed()));
            }
            for line in rem_lines {
                out.push_str(&format!("      {}\n", line.dimmed()));
            }
        }
    }
    out.push('\n');
}
