use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mustache_validator_cli::commands::{
    check_cmd::{self, CheckArgs},
    config_cmd::{self, ConfigCommands},
};

/// Mustache validator CLI: find data properties a template would miss
#[derive(Parser)]
#[command(name = "mustache-validator")]
#[command(about = "Check Mustache render data for missing properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a JSON data file against Mustache variable names
    #[command()]
    Check(CheckArgs),

    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the CLI version
    Version,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("MUSTACHE_VALIDATOR_LOG"))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Check(args) => match check_cmd::execute(args) {
            Ok(report) => {
                for path in &report.missing {
                    println!("Missing Mustache data property: {path}");
                }
                println!(
                    "Checked {} names, {} missing",
                    report.names_checked,
                    report.missing.len()
                );
                if !report.is_success() {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                error!("Error: {e}");
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        },
        Commands::Config(cmd) => {
            if let Err(e) = config_cmd::execute(cmd) {
                error!("Error: {e}");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("mustache-validator {}", env!("CARGO_PKG_VERSION"));
        }
    }
}
