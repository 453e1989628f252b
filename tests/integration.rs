use assert_cmd::Command;
use predicates::prelude::*;

fn skillcheck() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("skillcheck")
}

/// Writes a SKILL.md into `<root>/<dir_name>/` and returns the file path.
fn write_skill(root: &std::path::Path, dir_name: &str, content: &str) -> std::path::PathBuf {
    let skill_dir = root.join(dir_name);
    std::fs::create_dir_all(&skill_dir).unwrap();
    let skill_md = skill_dir.join("SKILL.md");
    std::fs::write(&skill_md, content).unwrap();
    skill_md
}

// ── fixtures ─────────────────────────────────────────────────────────────────

#[test]
fn clean_skill_passes_with_no_findings() {
    skillcheck()
        .arg("tests/fixtures/clean-skill/SKILL.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("all validation checks passed"));
}

#[test]
fn broken_skill_fails() {
    skillcheck()
        .arg("tests/fixtures/broken-skill/SKILL.md")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("name/uppercase"))
        .stdout(predicate::str::contains("directory/name-mismatch"))
        .stdout(predicate::str::contains("references/broken-link"));
}

#[test]
fn broken_skill_json_format() {
    skillcheck()
        .args(["tests/fixtures/broken-skill/SKILL.md", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"));
}

#[test]
fn json_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("report.json");

    skillcheck()
        .args([
            "tests/fixtures/clean-skill/SKILL.md",
            "--format",
            "json",
            "--output",
            output_file.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_file).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Output file should contain valid JSON");
    assert!(parsed["passed"].as_bool().unwrap());
    assert_eq!(parsed["summary"]["errors"].as_u64(), Some(0));
}

// ── argument handling ────────────────────────────────────────────────────────

#[test]
fn no_arguments_is_usage_error() {
    skillcheck()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_arguments_are_usage_error() {
    skillcheck()
        .args(["one/SKILL.md", "two/SKILL.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_zero() {
    skillcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Packaging lint"));
}

#[test]
fn missing_target_reported_on_stderr() {
    skillcheck()
        .arg("tests/fixtures/does-not-exist/SKILL.md")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

// ── driver behavior ──────────────────────────────────────────────────────────

#[test]
fn missing_description_is_exactly_one_error() {
    let dir = tempfile::tempdir().unwrap();
    let skill_md = write_skill(dir.path(), "my-skill", "---\nname: my-skill\n---\n\n# Body\n");

    skillcheck()
        .args([skill_md.to_str().unwrap(), "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("description/required"))
        .stdout(predicate::str::contains("\"errors\": 1"));
}

#[test]
fn warnings_alone_keep_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    let skill_md = write_skill(
        dir.path(),
        "my-skill",
        "---\nname: my-skill\ndescription: Tiny.\n---\n\n# Body\n",
    );

    skillcheck()
        .arg(skill_md.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("passed with"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let skill_md = write_skill(
        dir.path(),
        "my-skill",
        "---\nname: my-skill\ndescription: Tiny.\n---\n\n# Body\n",
    );

    skillcheck()
        .args([skill_md.to_str().unwrap(), "--strict"])
        .assert()
        .code(1);
}

#[test]
fn unconventional_file_name_warns_but_passes() {
    let dir = tempfile::tempdir().unwrap();
    let skill_dir = dir.path().join("my-skill");
    std::fs::create_dir_all(&skill_dir).unwrap();
    let other_md = skill_dir.join("OTHER.md");
    std::fs::write(
        &other_md,
        "---\nname: my-skill\ndescription: Validates sample inputs for the demo suite.\n---\n\n# Body\n",
    )
    .unwrap();

    skillcheck()
        .arg(other_md.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("File should be named 'SKILL.md'"));
}

#[test]
fn missing_header_start_blocks_every_other_check() {
    let dir = tempfile::tempdir().unwrap();
    let skill_md = write_skill(dir.path(), "my-skill", "# No header here\n");

    skillcheck()
        .arg(skill_md.to_str().unwrap())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must start with '---'"))
        .stdout(predicate::str::contains("frontmatter parsing failed"));
}

#[test]
fn missing_header_end_is_blocking_error() {
    let dir = tempfile::tempdir().unwrap();
    let skill_md = write_skill(dir.path(), "my-skill", "---\nname: my-skill\n");

    skillcheck()
        .arg(skill_md.to_str().unwrap())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must end with '---'"));
}

#[test]
fn config_can_disable_a_check() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("skillcheck.toml");
    std::fs::write(&config_path, "[checks]\nbundle_size = false\n").unwrap();

    skillcheck()
        .args([
            "tests/fixtures/clean-skill/SKILL.md",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled in config"));
}

#[test]
fn missing_config_file_is_an_error() {
    skillcheck()
        .args([
            "tests/fixtures/clean-skill/SKILL.md",
            "--config",
            "does-not-exist.toml",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}
