//! Validation checks.
//!
//! The [`frontmatter`] parser gates everything else: when the header fails
//! to parse, no later check runs. The remaining checks are independent pure
//! functions — each takes the parsed value (or filesystem context) it needs
//! and returns findings without touching shared state:
//!
//! - **[`fields`]** — `name`, `description`, and directory-name rules.
//! - **[`size`]** — body line-count and bundle byte-size limits.
//! - **[`references`]** — reference-file navigation aids and link targets.
//!
//! Checks never suppress each other's findings; a name that is both too
//! long and uppercase produces two findings, not one.

pub mod fields;
pub mod frontmatter;
pub mod references;
pub mod size;
