//! Validation orchestration.
//!
//! [`run_validation`] is the main entry-point for validating a skill
//! bundle. It reads the target document, parses the metadata header, runs
//! every enabled check in a fixed order, and assembles the final
//! [`ValidationReport`]. Control flow is strictly sequential; the header
//! parse is the only gate — every later check runs unconditionally once
//! the header parses.

use crate::checks::{fields, frontmatter, references, size};
use crate::config::Config;
use crate::finding::{CheckResult, Finding, ValidationReport};
use std::fmt;
use std::path::{Path, PathBuf};

/// Check sections skipped wholesale when the header fails to parse,
/// in their fixed run order.
const GATED_SECTIONS: &[&str] = &[
    "name",
    "description",
    "directory",
    "skill-size",
    "bundle-size",
    "references",
];

/// Conditions that abort the run before any check produces findings.
///
/// These are reported on stderr apart from a failed validation — there is
/// no report to print when the target cannot even be read.
#[derive(Debug)]
pub enum FatalError {
    FileNotFound(PathBuf),
    Read(PathBuf, std::io::Error),
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            FatalError::Read(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for FatalError {}

/// Validates the skill bundle anchored at `skill_file`.
///
/// # Pipeline
///
/// 1. Confirm the target exists and read it (either failure is a
///    [`FatalError`]).
/// 2. Warn when the file is not named `SKILL.md`.
/// 3. Parse the metadata header. A parse failure produces a report whose
///    only finding is the blocking error, with every later section marked
///    skipped.
/// 4. Run the field, directory, size, and reference checks in fixed
///    order, pooling findings. Disabled checks are marked skipped.
///
/// # Errors
///
/// Returns [`FatalError`] when the target is missing or unreadable.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skillcheck::{config::Config, validate};
///
/// let config = Config::load(None).unwrap();
/// let report = validate::run_validation(Path::new("./my-skill/SKILL.md"), &config)?;
///
/// std::process::exit(if report.passed { 0 } else { 1 });
/// # Ok::<(), skillcheck::validate::FatalError>(())
/// ```
pub fn run_validation(skill_file: &Path, config: &Config) -> Result<ValidationReport, FatalError> {
    if !skill_file.exists() {
        return Err(FatalError::FileNotFound(skill_file.to_path_buf()));
    }

    // Bare relative file names have an empty parent; the bundle root is
    // the working directory in that case.
    let bundle_root = match skill_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let bundle = bundle_name(&bundle_root);

    let mut frontmatter_findings = Vec::new();
    if skill_file.file_name().and_then(|n| n.to_str()) != Some("SKILL.md") {
        frontmatter_findings.push(Finding::warning(
            "frontmatter",
            "target/filename",
            "File should be named 'SKILL.md'",
        ));
    }

    let content = std::fs::read_to_string(skill_file)
        .map_err(|e| FatalError::Read(skill_file.to_path_buf(), e))?;

    let fm = match frontmatter::parse(&content) {
        Ok(fm) => fm,
        Err(e) => {
            let rule_id = match e {
                frontmatter::HeaderError::MissingStart => "header/missing-start",
                frontmatter::HeaderError::MissingEnd => "header/missing-end",
            };
            frontmatter_findings.push(Finding::error("frontmatter", rule_id, e.to_string()));

            let mut results = vec![CheckResult::new("frontmatter", frontmatter_findings)];
            for section in GATED_SECTIONS {
                results.push(CheckResult::skipped(section, "frontmatter parsing failed"));
            }
            return Ok(ValidationReport::from_results(
                skill_file.to_path_buf(),
                &bundle,
                results,
                config.strict.enabled,
            ));
        }
    };

    let name = fm.get("name").unwrap_or("");
    let description = fm.get("description").unwrap_or("");

    let results = vec![
        CheckResult::new("frontmatter", frontmatter_findings),
        run_check(config, "name", || fields::check_name(name, &config.limits)),
        run_check(config, "description", || {
            fields::check_description(description, &config.limits)
        }),
        run_check(config, "directory", || {
            fields::check_directory(skill_file, name)
        }),
        run_check(config, "skill-size", || {
            size::check_body_size(&content, &config.limits)
        }),
        run_check(config, "bundle-size", || {
            size::check_bundle_size(&bundle_root, &config.limits)
        }),
        run_check(config, "references", || {
            references::check_references(&bundle_root, &content, &config.limits)
        }),
    ];

    Ok(ValidationReport::from_results(
        skill_file.to_path_buf(),
        &bundle,
        results,
        config.strict.enabled,
    ))
}

fn run_check(config: &Config, name: &str, check: impl FnOnce() -> Vec<Finding>) -> CheckResult {
    if config.is_check_enabled(name) {
        CheckResult::new(name, check())
    } else {
        CheckResult::skipped(name, "disabled in config")
    }
}

/// Extracts the bundle name from the bundle root path.
///
/// Returns the last path component or `"unknown"` when the path has no
/// file-name segment (e.g., `/` or `.`).
fn bundle_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
