//! Wayfind CLI binary.

use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;
use wayfind::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // RUST_LOG wins over -v, e.g. RUST_LOG=wayfind=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting wayfind CLI");

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
