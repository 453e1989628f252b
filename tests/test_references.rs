use std::path::Path;

use skillcheck::checks::references::check_references;
use skillcheck::config::LimitsConfig;
use skillcheck::finding::{Finding, Severity};

fn limits() -> LimitsConfig {
    LimitsConfig::default()
}

fn make_reference_dir(root: &Path) -> std::path::PathBuf {
    let dir = root.join("reference");
    std::fs::create_dir(&dir).unwrap();
    dir
}

fn long_markdown(lines: usize) -> String {
    "filler line\n".repeat(lines)
}

fn rule_ids(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.rule_id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Missing reference directory
// ---------------------------------------------------------------------------

#[test]
fn no_reference_dir_produces_no_findings() {
    let dir = tempfile::tempdir().unwrap();
    // Even a dangling link goes unchecked without a reference directory.
    let findings = check_references(dir.path(), "[x](reference/missing.md)", &limits());
    assert!(findings.is_empty());
}

// ---------------------------------------------------------------------------
// Table-of-contents presence
// ---------------------------------------------------------------------------

#[test]
fn long_reference_file_without_toc_warns() {
    let dir = tempfile::tempdir().unwrap();
    let refs = make_reference_dir(dir.path());
    std::fs::write(refs.join("guide.md"), long_markdown(101)).unwrap();

    let findings = check_references(dir.path(), "", &limits());
    assert_eq!(rule_ids(&findings), vec!["references/missing-toc"]);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert!(findings[0].message.contains("guide.md"));
    assert!(findings[0].message.contains("101 lines"));
}

#[test]
fn toc_heading_suppresses_warning() {
    let dir = tempfile::tempdir().unwrap();
    let refs = make_reference_dir(dir.path());
    let content = format!("## Table of Contents\n{}", long_markdown(120));
    std::fs::write(refs.join("guide.md"), content).unwrap();

    assert!(check_references(dir.path(), "", &limits()).is_empty());
}

#[test]
fn toc_heading_match_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let refs = make_reference_dir(dir.path());
    let content = format!("## TABLE OF CONTENTS\n{}", long_markdown(120));
    std::fs::write(refs.join("guide.md"), content).unwrap();

    assert!(check_references(dir.path(), "", &limits()).is_empty());
}

#[test]
fn contents_and_toc_headings_also_count() {
    let dir = tempfile::tempdir().unwrap();
    let refs = make_reference_dir(dir.path());
    std::fs::write(
        refs.join("a.md"),
        format!("## Contents\n{}", long_markdown(120)),
    )
    .unwrap();
    std::fs::write(refs.join("b.md"), format!("## TOC\n{}", long_markdown(120))).unwrap();

    assert!(check_references(dir.path(), "", &limits()).is_empty());
}

#[test]
fn file_at_line_threshold_needs_no_toc() {
    let dir = tempfile::tempdir().unwrap();
    let refs = make_reference_dir(dir.path());
    std::fs::write(refs.join("guide.md"), long_markdown(100)).unwrap();

    assert!(check_references(dir.path(), "", &limits()).is_empty());
}

#[test]
fn non_markdown_reference_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let refs = make_reference_dir(dir.path());
    std::fs::write(refs.join("data.txt"), long_markdown(200)).unwrap();

    assert!(check_references(dir.path(), "", &limits()).is_empty());
}

// ---------------------------------------------------------------------------
// Link resolution
// ---------------------------------------------------------------------------

#[test]
fn broken_reference_link_is_error() {
    let dir = tempfile::tempdir().unwrap();
    make_reference_dir(dir.path());

    let findings = check_references(dir.path(), "[the guide](reference/missing.md)", &limits());
    assert_eq!(rule_ids(&findings), vec!["references/broken-link"]);
    assert_eq!(findings[0].severity, Severity::Error);
    assert!(findings[0].message.contains("the guide"));
    assert!(findings[0].message.contains("reference/missing.md"));
}

#[test]
fn resolvable_link_produces_no_finding() {
    let dir = tempfile::tempdir().unwrap();
    let refs = make_reference_dir(dir.path());
    std::fs::write(refs.join("guide.md"), "# Guide\n").unwrap();

    let findings = check_references(dir.path(), "[guide](reference/guide.md)", &limits());
    assert!(findings.is_empty());
}

#[test]
fn external_urls_are_never_checked() {
    let dir = tempfile::tempdir().unwrap();
    make_reference_dir(dir.path());

    let content = "[a](https://example.com/missing) [b](http://example.com/also-missing)";
    assert!(check_references(dir.path(), content, &limits()).is_empty());
}

#[test]
fn targets_outside_blessed_directories_are_not_checked() {
    let dir = tempfile::tempdir().unwrap();
    make_reference_dir(dir.path());

    let findings = check_references(dir.path(), "[x](docs/missing.md)", &limits());
    assert!(findings.is_empty());
}

#[test]
fn examples_and_templates_prefixes_are_checked() {
    let dir = tempfile::tempdir().unwrap();
    make_reference_dir(dir.path());

    let content = "[ex](examples/missing.py) [tpl](templates/missing.tmpl)";
    let findings = check_references(dir.path(), content, &limits());
    assert_eq!(findings.len(), 2);
    assert!(findings
        .iter()
        .all(|f| f.rule_id == "references/broken-link"));
}
