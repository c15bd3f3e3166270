//! Saifu - deterministic multi-chain address derivation CLI.
//!
//! Generate or import a BIP-39 mnemonic and display the derived Ethereum
//! and Solana addresses.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Ethereum(cmd) => cmd.execute()?,
        Commands::Solana(cmd) => cmd.execute()?,
    }
    Ok(())
}
