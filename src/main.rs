mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use skillcheck::{config::Config, output, validate};

fn main() {
    // Usage problems land on stderr with exit code 1; --help and --version
    // keep clap's print-and-succeed behavior.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let mut config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if cli.strict {
        config.strict.enabled = true;
    }

    let report = match validate::run_validation(&cli.skill_file, &config) {
        Ok(report) => report,
        Err(e) => {
            // Missing or unreadable targets abort before any check runs and
            // are reported apart from a failed validation.
            eprintln!("{} {e}", "✗".red().bold());
            std::process::exit(1);
        }
    };

    let formatted = output::format_report(&report, &cli.format);

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(1);
        });
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }

    std::process::exit(if report.passed { 0 } else { 1 });
}
