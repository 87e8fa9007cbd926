//! zahlklar - replace exact numbers in German text with readable approximations

use anyhow::Result;
use clap::Parser;
use zahlklar_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "zahlklar")]
#[command(version)]
#[command(about = "Simplify numbers in German text for easier reading", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
