use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding.
///
/// Findings are plain messages tagged with a severity. The `rule_id` gives
/// each rule a stable machine-readable identity (e.g. `"name/uppercase"`),
/// and `check` names the section that produced it. `remediation` carries a
/// fixed how-to-fix hint where one exists.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Finding {
    pub rule_id: String,
    pub check: String,
    pub severity: Severity,
    pub message: String,
    pub remediation: Option<String>,
}

impl Finding {
    pub fn error(check: &str, rule_id: &str, message: impl Into<String>) -> Self {
        Finding {
            rule_id: rule_id.to_string(),
            check: check.to_string(),
            severity: Severity::Error,
            message: message.into(),
            remediation: None,
        }
    }

    pub fn warning(check: &str, rule_id: &str, message: impl Into<String>) -> Self {
        Finding {
            rule_id: rule_id.to_string(),
            check: check.to_string(),
            severity: Severity::Warning,
            message: message.into(),
            remediation: None,
        }
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

/// Outcome of one check section.
#[derive(Debug, serde::Serialize)]
pub struct CheckResult {
    pub check_name: String,
    pub findings: Vec<Finding>,
    pub skipped: bool,
    pub skip_reason: Option<String>,
}

impl CheckResult {
    pub fn new(name: &str, findings: Vec<Finding>) -> Self {
        CheckResult {
            check_name: name.to_string(),
            findings,
            skipped: false,
            skip_reason: None,
        }
    }

    pub fn skipped(name: &str, reason: &str) -> Self {
        CheckResult {
            check_name: name.to_string(),
            findings: vec![],
            skipped: true,
            skip_reason: Some(reason.to_string()),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ValidationReport {
    pub target: PathBuf,
    pub bundle: String,
    pub timestamp: String,
    pub status: ValidationStatus,
    pub check_results: Vec<CheckResult>,
    pub findings: Vec<Finding>,
    pub passed: bool,
}

impl ValidationReport {
    /// Assembles a report from per-check results.
    ///
    /// Findings are pooled in check-run order, never deduplicated or
    /// reordered. Warnings do not fail the run unless `strict` is set.
    pub fn from_results(
        target: PathBuf,
        bundle: &str,
        results: Vec<CheckResult>,
        strict: bool,
    ) -> Self {
        let findings: Vec<Finding> = results
            .iter()
            .flat_map(|r| r.findings.iter().cloned())
            .collect();

        let status = compute_status(&findings, strict);
        let passed = !matches!(status, ValidationStatus::Failed);

        ValidationReport {
            target,
            bundle: bundle.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
            check_results: results,
            findings,
            passed,
        }
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Count errors and warnings in a single pass.
    ///
    /// Returns `(errors, warnings)`. Prefer this over calling
    /// `error_count()` + `warning_count()` separately when both values are
    /// needed at the same time (e.g. summary rendering).
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.findings
            .iter()
            .fold((0, 0), |(e, w), f| match f.severity {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            })
    }
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Passed,
    Warning,
    Failed,
}

fn compute_status(findings: &[Finding], strict: bool) -> ValidationStatus {
    // Single pass: track both flags simultaneously.
    let (has_errors, has_warnings) =
        findings
            .iter()
            .fold((false, false), |(e, w), f| match f.severity {
                Severity::Error => (true, w),
                Severity::Warning => (e, true),
            });

    if has_errors {
        ValidationStatus::Failed
    } else if has_warnings {
        if strict {
            ValidationStatus::Failed
        } else {
            ValidationStatus::Warning
        }
    } else {
        ValidationStatus::Passed
    }
}
