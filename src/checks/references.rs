//! Reference-file navigation and link integrity.
//!
//! Two sub-checks over the optional `reference/` subdirectory:
//!
//! 1. Long reference files (over the configured line threshold) should
//!    open with a table of contents. Files that cannot be read count as
//!    zero lines — unreadability is not itself a finding.
//! 2. Every markdown link in the document whose target lives under one of
//!    the blessed auxiliary directories must resolve to an existing file.
//!    External URLs are skipped; targets outside the blessed prefixes are
//!    deliberately not checked.
//!
//! When `reference/` does not exist, both sub-checks produce no findings.

use crate::config::LimitsConfig;
use crate::finding::Finding;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Auxiliary directories whose relative link targets are checked.
pub const LINKED_DIR_PREFIXES: &[&str] = &["reference/", "examples/", "templates/"];

/// Headings (lowercased) that count as a table of contents.
pub const TOC_HEADINGS: &[&str] = &["## table of contents", "## contents", "## toc"];

/// `[text](target)` markdown link pattern.
static RE_MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Runs both reference sub-checks against the bundle.
pub fn check_references(root: &Path, content: &str, limits: &LimitsConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    let reference_dir = root.join("reference");
    if !reference_dir.exists() {
        return findings;
    }

    for path in reference_markdown_files(&reference_dir) {
        let Ok(text) = std::fs::read_to_string(&path) else {
            continue;
        };
        let line_count = text.lines().count();
        if line_count > limits.toc_line_threshold && !has_table_of_contents(&text) {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            findings.push(
                Finding::warning(
                    "references",
                    "references/missing-toc",
                    format!(
                        "Reference file '{file_name}' has {line_count} lines but no table of contents"
                    ),
                )
                .with_remediation(
                    "Add a TOC at the top for navigation, e.g.\n\
                     ## Table of Contents\n\
                     - [Section 1](#section-1)\n\
                     - [Section 2](#section-2)",
                ),
            );
        }
    }

    for cap in RE_MARKDOWN_LINK.captures_iter(content) {
        let text = &cap[1];
        let target = &cap[2];

        if target.starts_with("http://") || target.starts_with("https://") {
            continue;
        }

        if LINKED_DIR_PREFIXES.iter().any(|p| target.starts_with(p)) {
            let resolved = root.join(target);
            if !resolved.exists() {
                findings.push(Finding::error(
                    "references",
                    "references/broken-link",
                    format!(
                        "Broken link '{text}' -> {target} (file does not exist: {})",
                        resolved.display()
                    ),
                ));
            }
        }
    }

    findings
}

/// Markdown files directly inside `dir`, sorted for deterministic output.
fn reference_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return vec![];
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
        .collect();

    files.sort();
    files
}

fn has_table_of_contents(content: &str) -> bool {
    let lower = content.to_lowercase();
    TOC_HEADINGS.iter().any(|h| lower.contains(h))
}
