use std::path::Path;

use skillcheck::config::Config;

#[test]
fn defaults_match_packaging_convention() {
    let config = Config::default();
    assert_eq!(config.limits.max_name_length, 64);
    assert_eq!(config.limits.max_description_length, 1024);
    assert_eq!(config.limits.max_body_lines, 500);
    assert_eq!(config.limits.warn_body_lines, 400);
    assert_eq!(config.limits.max_bundle_bytes, 8 * 1024 * 1024);
    assert_eq!(config.limits.toc_line_threshold, 100);
    assert!(!config.strict.enabled);
}

#[test]
fn all_checks_enabled_by_default() {
    let config = Config::default();
    for check in [
        "name",
        "description",
        "directory",
        "skill-size",
        "bundle-size",
        "references",
    ] {
        assert!(config.is_check_enabled(check), "{check} should default on");
    }
    // Unknown names are treated as enabled.
    assert!(config.is_check_enabled("unknown"));
}

#[test]
fn explicit_missing_config_path_errors() {
    let err = Config::load(Some(Path::new("/no/such/skillcheck.toml"))).unwrap_err();
    assert!(err.contains("not found"));
}

#[test]
fn partial_toml_overrides_merge_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skillcheck.toml");
    std::fs::write(
        &path,
        "[limits]\nmax_body_lines = 100\n\n[checks]\nreferences = false\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.limits.max_body_lines, 100);
    // Untouched fields keep their defaults.
    assert_eq!(config.limits.max_bundle_bytes, 8 * 1024 * 1024);
    assert!(!config.is_check_enabled("references"));
    assert!(config.is_check_enabled("name"));
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skillcheck.toml");
    std::fs::write(&path, "limits = not valid toml").unwrap();

    assert!(Config::load(Some(&path)).is_err());
}
