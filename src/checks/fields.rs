//! Field-level validators for the `name` and `description` metadata fields,
//! plus the directory-name consistency rule.
//!
//! Each validator is a pure function from a field value (and, for the
//! directory rule, path context) to findings. Apart from the initial
//! required-field gate, every rule is independent and cumulative — a name
//! can trigger several errors at once.
//!
//! # Rules
//!
//! | ID | Sev | What it checks |
//! |----|-----|----------------|
//! | `name/required` | Error | `name` must exist and be non-empty |
//! | `name/too-long` | Error | `name` must be ≤ 64 characters |
//! | `name/uppercase` | Error | No uppercase letters |
//! | `name/invalid-chars` | Error | Only `[a-z0-9-]` allowed |
//! | `name/reserved-word` | Error | Must not contain "anthropic"/"claude" |
//! | `name/hyphen-edge` | Error | Must not start or end with `-` |
//! | `name/xml-tags` | Error | No `<`/`>` |
//! | `description/required` | Error | `description` must exist and be non-empty |
//! | `description/too-long` | Error | Must be ≤ 1024 characters |
//! | `description/xml-tags` | Error | No `<`/`>` |
//! | `description/too-short` | Warning | Should be ≥ 20 characters |
//! | `description/no-action-verb` | Warning | Should carry an action phrase |
//! | `directory/name-mismatch` | Error | Bundle directory must equal `name` |

use crate::config::LimitsConfig;
use crate::finding::Finding;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Substrings a skill name may never contain.
pub const RESERVED_NAME_WORDS: &[&str] = &["anthropic", "claude"];

/// Phrases that signal a description actually says what the skill does.
/// Descriptions lacking all of them draw a discoverability warning.
pub const ACTION_PHRASES: &[&str] = &[
    "calculate",
    "analyze",
    "apply",
    "create",
    "generate",
    "validate",
    "format",
    "process",
    "convert",
    "provide",
    "use when",
    "helps with",
];

static RE_UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());

static RE_NAME_CHARSET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Validates the `name` field.
///
/// An empty or missing value short-circuits with the required-field error;
/// otherwise every rule runs and findings accumulate.
pub fn check_name(name: &str, limits: &LimitsConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    if name.is_empty() {
        findings.push(Finding::error(
            "name",
            "name/required",
            "'name' field is required and cannot be empty",
        ));
        return findings;
    }

    let char_len = name.chars().count();
    if char_len > limits.max_name_length {
        findings.push(Finding::error(
            "name",
            "name/too-long",
            format!(
                "'name' must be at most {} characters (got {char_len})",
                limits.max_name_length
            ),
        ));
    }

    if RE_UPPERCASE.is_match(name) {
        findings.push(Finding::error(
            "name",
            "name/uppercase",
            "'name' must be lowercase (found uppercase letters)",
        ));
    }

    if !RE_NAME_CHARSET.is_match(name) {
        findings.push(Finding::error(
            "name",
            "name/invalid-chars",
            "'name' can only contain lowercase letters, numbers, and hyphens",
        ));
    }

    if RESERVED_NAME_WORDS.iter().any(|w| name.contains(w)) {
        findings.push(Finding::error(
            "name",
            "name/reserved-word",
            "'name' cannot contain reserved words 'anthropic' or 'claude'",
        ));
    }

    if name.starts_with('-') || name.ends_with('-') {
        findings.push(Finding::error(
            "name",
            "name/hyphen-edge",
            "'name' cannot start or end with a hyphen",
        ));
    }

    if name.contains('<') || name.contains('>') {
        findings.push(Finding::error(
            "name",
            "name/xml-tags",
            "'name' cannot contain XML tags",
        ));
    }

    findings
}

/// Validates the `description` field.
///
/// An empty or missing value short-circuits with the required-field error.
pub fn check_description(description: &str, limits: &LimitsConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    if description.is_empty() {
        findings.push(Finding::error(
            "description",
            "description/required",
            "'description' field is required and cannot be empty",
        ));
        return findings;
    }

    let char_len = description.chars().count();
    if char_len > limits.max_description_length {
        findings.push(Finding::error(
            "description",
            "description/too-long",
            format!(
                "'description' must be at most {} characters (got {char_len})",
                limits.max_description_length
            ),
        ));
    }

    if description.contains('<') || description.contains('>') {
        findings.push(Finding::error(
            "description",
            "description/xml-tags",
            "'description' cannot contain XML tags",
        ));
    }

    if char_len < limits.min_description_length {
        findings.push(Finding::warning(
            "description",
            "description/too-short",
            "'description' seems very short - include WHAT and WHEN (trigger keywords)",
        ));
    }

    let lower = description.to_lowercase();
    if !ACTION_PHRASES.iter().any(|p| lower.contains(p)) {
        findings.push(Finding::warning(
            "description",
            "description/no-action-verb",
            "'description' should include action verbs or 'use when' for better discoverability",
        ));
    }

    findings
}

/// Checks that the bundle directory's base name equals the `name` field.
///
/// Runs with whatever `name` value the header produced, empty string
/// included — a bundle with no usable name still gets the mismatch report.
pub fn check_directory(skill_file: &Path, name: &str) -> Vec<Finding> {
    let directory_name = skill_file
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if directory_name != name {
        return vec![Finding::error(
            "directory",
            "directory/name-mismatch",
            format!("Directory name '{directory_name}' does not match skill name '{name}'"),
        )
        .with_remediation(format!("Expected directory: .claude/skills/{name}/"))];
    }

    vec![]
}
