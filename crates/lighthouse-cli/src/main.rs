//! Lighthouse CLI
//!
//! Command-line interface for rendering spun errors and the canonical catalogue

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lighthouse")]
#[command(about = "Lighthouse - severity-aware structured errors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Spin the demonstration error chain at a disclosure level
    Spin(commands::spin::SpinArgs),
    /// Print the canonical errors every registry is seeded with
    Canonical(commands::canonical::CanonicalArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Spin(args) => commands::spin::execute(args),
        Commands::Canonical(args) => commands::canonical::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
