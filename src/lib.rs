//! # skillcheck
//!
//! Packaging lint for AI agent skill bundles.
//!
//! `skillcheck` validates a skill's `SKILL.md` against the packaging
//! convention: metadata header format, `name`/`description` rules,
//! directory naming, body and bundle size limits, and cross-file link
//! integrity. Every run is one sequential pass over a single bundle;
//! nothing on disk is ever modified.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skillcheck::{config::Config, output, validate};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = validate::run_validation(Path::new("./my-skill/SKILL.md"), &config)
//!     .expect("target missing or unreadable");
//!
//! if report.passed {
//!     println!("Validation passed!");
//! } else {
//!     let text = output::format_report(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`config`]** — TOML-backed limits, strict mode, per-check toggles.
//! 2. **[`checks`]** — the frontmatter gate plus independent rule checks.
//! 3. **[`validate`]** — run every check in fixed order and pool findings.
//! 4. **[`finding`]** — core data types ([`finding::Finding`],
//!    [`finding::ValidationReport`]).
//! 5. **[`output`]** — render reports as colored text or JSON.
//!
//! ## Checks
//!
//! | Check | Description |
//! |-------|-------------|
//! | `frontmatter` | `---`-delimited header parses into key/value fields |
//! | `name` | lowercase-kebab-case, ≤ 64 chars, no reserved words |
//! | `description` | present, ≤ 1024 chars, carries an action phrase |
//! | `directory` | bundle directory name matches the `name` field |
//! | `skill-size` | body within the 500-line limit |
//! | `bundle-size` | bundle tree within the 8 MiB limit |
//! | `references` | long reference files navigable, relative links resolve |

pub mod checks;
pub mod config;
pub mod finding;
pub mod output;
pub mod validate;
