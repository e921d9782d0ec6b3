mod authors;
mod branch;
mod cli;
mod commands;
mod config;
mod discovery;
mod email;
mod error;
mod git;
mod identity;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, config::Settings, error::AppError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout and succeed, usage errors exit 1
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    commands::run(cli, &settings)
}
