mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{quiz, report, summary};

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Report(args) => report::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
        Commands::Quiz(args) => quiz::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
