//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing bundle metadata, a
//! severity summary, per-check results, and the pooled findings list.

use crate::finding::{CheckResult, Finding, ValidationReport, ValidationStatus};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    bundle: &'a str,
    target: String,
    timestamp: &'a str,
    status: &'a ValidationStatus,
    passed: bool,
    summary: Summary,
    checks: &'a [CheckResult],
    findings: &'a [Finding],
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    // Single pass over findings instead of two separate iterations.
    let (errors, warnings) = report.count_by_severity();

    let output = JsonOutput {
        bundle: &report.bundle,
        target: report.target.display().to_string(),
        timestamp: &report.timestamp,
        status: &report.status,
        passed: report.passed,
        summary: Summary { errors, warnings },
        checks: &report.check_results,
        findings: &report.findings,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
