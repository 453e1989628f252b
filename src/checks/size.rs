//! Body and bundle size limits.
//!
//! Two independent checks: the line count of the document body (everything
//! after the closing header delimiter) and the byte size of the whole
//! bundle directory tree. Each has a hard limit that fails validation and
//! a soft threshold that only warns. Comparisons are strict greater-than —
//! landing exactly on a limit is fine.

use crate::checks::frontmatter::HEADER_DELIMITER;
use crate::config::LimitsConfig;
use crate::finding::Finding;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How many of the largest files to name when the bundle is over budget.
const LARGEST_FILES_REPORTED: usize = 5;

/// Counts the lines of the document body.
///
/// The header boundary is recomputed here rather than taken from the
/// parser so the check stays self-contained: the first line whose trimmed
/// form is the delimiter, after the opening line, closes the header and
/// the body is everything after it. Without any closing delimiter the
/// whole document counts as body.
///
/// Counting splits on `\n`, so a trailing newline contributes one empty
/// trailing segment — the same arithmetic the packaging convention was
/// defined against.
pub fn body_line_count(content: &str) -> usize {
    let lines: Vec<&str> = content.split('\n').collect();
    let closing = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == HEADER_DELIMITER)
        .map(|(idx, _)| idx);

    match closing {
        Some(idx) => lines.len() - (idx + 1),
        None => lines.len(),
    }
}

/// Checks the body line count against the hard and soft limits.
pub fn check_body_size(content: &str, limits: &LimitsConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let body_lines = body_line_count(content);

    if body_lines > limits.max_body_lines {
        let overage = body_lines - limits.max_body_lines;
        findings.push(
            Finding::error(
                "skill-size",
                "skill-size/body-too-long",
                format!(
                    "SKILL.md body exceeds the {} line limit ({body_lines} lines, {overage} over)",
                    limits.max_body_lines
                ),
            )
            .with_remediation(
                "Extract detailed sections to reference/ files and move full examples \
                 into examples/ so SKILL.md keeps only essential instructions",
            ),
        );
    } else if body_lines > limits.warn_body_lines {
        findings.push(Finding::warning(
            "skill-size",
            "skill-size/body-near-limit",
            format!(
                "SKILL.md body is approaching the {} line limit ({body_lines}/{} lines)",
                limits.max_body_lines, limits.max_body_lines
            ),
        ));
    }

    findings
}

/// Total size in bytes of every regular file under `root`.
///
/// Symlinks and directories contribute nothing to the sum.
pub fn directory_size(root: &Path) -> u64 {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Formats a byte count as a human-readable size.
///
/// Binary units, two decimal places: `format_size(1536)` is `"1.50 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.2} TB")
}

/// The `top_n` largest regular files under `root`, descending by size.
fn largest_files(root: &Path, top_n: usize) -> Vec<(PathBuf, u64)> {
    let mut files: Vec<(PathBuf, u64)> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let size = e.metadata().ok()?.len();
            Some((e.into_path(), size))
        })
        .collect();

    files.sort_by(|a, b| b.1.cmp(&a.1));
    files.truncate(top_n);
    files
}

/// Checks the bundle tree's byte size against the hard and soft limits.
///
/// Over the hard limit the error names the largest files so the fix is
/// obvious without re-scanning the tree by hand.
pub fn check_bundle_size(root: &Path, limits: &LimitsConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let total = directory_size(root);
    let max = limits.max_bundle_bytes;

    if total > max {
        let overage = total - max;
        let mut message = format!(
            "Skill bundle exceeds the {} limit ({} total, {} over)\nLargest files:",
            format_size(max),
            format_size(total),
            format_size(overage),
        );
        for (path, size) in largest_files(root, LARGEST_FILES_REPORTED) {
            let rel = path.strip_prefix(root).unwrap_or(&path);
            message.push_str(&format!("\n  - {}: {}", rel.display(), format_size(size)));
        }
        findings.push(
            Finding::error("bundle-size", "bundle-size/over-limit", message).with_remediation(
                "Remove redundant content, compress or drop large assets, and keep \
                 very large datasets outside the bundle",
            ),
        );
    } else if (total as f64) > (max as f64) * limits.bundle_warn_ratio {
        findings.push(Finding::warning(
            "bundle-size",
            "bundle-size/near-limit",
            format!(
                "Skill bundle is approaching the {} limit ({}/{})",
                format_size(max),
                format_size(total),
                format_size(max),
            ),
        ));
    }

    findings
}
