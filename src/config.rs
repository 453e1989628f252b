//! Configuration loading and management.
//!
//! Provides the TOML-based configuration file that holds every numeric
//! threshold the validators compare against, so rule logic never re-declares
//! literals.
//!
//! # Configuration file
//!
//! The default configuration file is `skillcheck.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use skillcheck::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert_eq!(config.limits.max_body_lines, 500);
//! ```
//!
//! All fields carry defaults matching the published skill packaging
//! convention, so the file can be omitted entirely.

use std::path::Path;

/// Main configuration for the validator.
///
/// Loaded from a TOML file (typically `skillcheck.toml`). All fields carry
/// sensible defaults so the config file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Size and length thresholds shared by every validator.
    pub limits: LimitsConfig,
    /// When strict mode is enabled, warnings are promoted to failures.
    pub strict: StrictConfig,
    /// Per-check on/off toggles.
    pub checks: ChecksConfig,
}

/// Numeric thresholds for field, body, and bundle limits.
///
/// The defaults encode the packaging convention: a 64-character kebab-case
/// name, a 1024-character description, a 500-line body, and an 8 MiB bundle.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum `name` field length in characters.
    pub max_name_length: usize,
    /// Maximum `description` field length in characters.
    pub max_description_length: usize,
    /// Descriptions shorter than this draw a warning.
    pub min_description_length: usize,
    /// Hard limit on body lines after the frontmatter.
    pub max_body_lines: usize,
    /// Bodies above this line count (but within the hard limit) draw a warning.
    pub warn_body_lines: usize,
    /// Hard limit on the total bundle size in bytes.
    pub max_bundle_bytes: u64,
    /// Fraction of `max_bundle_bytes` above which a warning fires.
    pub bundle_warn_ratio: f64,
    /// Reference files above this line count must carry a table of contents.
    pub toc_line_threshold: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_name_length: 64,
            max_description_length: 1024,
            min_description_length: 20,
            max_body_lines: 500,
            warn_body_lines: 400,
            max_bundle_bytes: 8 * 1024 * 1024,
            bundle_warn_ratio: 0.75,
            toc_line_threshold: 100,
        }
    }
}

/// Strict-mode configuration.
///
/// When [`enabled`](StrictConfig::enabled) is `true`, any finding with
/// [`Severity::Warning`](crate::finding::Severity::Warning) will cause the
/// validation to fail.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    /// Set to `true` to treat warnings as errors.
    pub enabled: bool,
}

/// Per-check on/off toggles.
///
/// Every check defaults to **enabled**. Set a field to `false` in the TOML
/// config file to skip that check. The frontmatter gate itself cannot be
/// disabled — every later check depends on a parsed header.
///
/// # Examples
///
/// ```toml
/// [checks]
/// bundle_size = false   # skip the 8 MiB bundle scan
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// `name` field rules.
    pub name: bool,
    /// `description` field rules.
    pub description: bool,
    /// Directory-name / `name` field consistency.
    pub directory: bool,
    /// Body line-count limit.
    pub skill_size: bool,
    /// Bundle byte-size limit.
    pub bundle_size: bool,
    /// Reference-file TOC and link resolution.
    pub references: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            name: true,
            description: true,
            directory: true,
            skill_size: true,
            bundle_size: true,
            references: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `skillcheck.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("skillcheck.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Returns `true` if the named check is enabled.
    ///
    /// Unknown check names are considered enabled (returns `true`).
    ///
    /// # Examples
    ///
    /// ```
    /// use skillcheck::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.is_check_enabled("name"));
    /// assert!(config.is_check_enabled("unknown_check"));
    /// ```
    pub fn is_check_enabled(&self, name: &str) -> bool {
        match name {
            "name" => self.checks.name,
            "description" => self.checks.description,
            "directory" => self.checks.directory,
            "skill-size" => self.checks.skill_size,
            "bundle-size" => self.checks.bundle_size,
            "references" => self.checks.references,
            _ => true,
        }
    }
}
