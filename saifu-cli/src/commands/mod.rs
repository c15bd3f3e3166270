//! CLI command definitions and handlers.

mod ethereum;
mod solana;

use clap::{Parser, Subcommand};
pub use ethereum::EthereumCommand;
pub use solana::SolanaCommand;

/// Saifu - deterministic multi-chain address derivation.
#[derive(Parser)]
#[command(name = "saifu")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available blockchain commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Ethereum address derivation.
    #[command(name = "eth", alias = "ethereum")]
    Ethereum(EthereumCommand),

    /// Solana address derivation.
    #[command(name = "sol", alias = "solana")]
    Solana(SolanaCommand),
}
