use clap::Parser;
use skillcheck::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillcheck",
    version,
    about = "Packaging lint for AI agent skill bundles"
)]
pub struct Cli {
    /// Path to the SKILL.md file to validate
    pub skill_file: PathBuf,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}
