//! Ethereum CLI commands.

use clap::{Args, Subcommand};
use colored::Colorize;
use saifu::Wallet;
use saifu_eth::{DerivedAddress, Deriver};

/// Ethereum address operations.
#[derive(Args)]
pub struct EthereumCommand {
    #[command(subcommand)]
    command: EthereumSubcommand,
}

#[derive(Subcommand)]
enum EthereumSubcommand {
    /// Generate a new mnemonic and show its first-account address.
    New {
        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long, default_value = "12")]
        words: usize,

        /// BIP39 passphrase (optional extra security).
        #[arg(short, long)]
        passphrase: Option<String>,
    },

    /// Show the first-account address for an existing mnemonic.
    Import {
        /// BIP39 mnemonic phrase.
        #[arg(short, long)]
        mnemonic: String,

        /// BIP39 passphrase (if used when creating).
        #[arg(short, long)]
        passphrase: Option<String>,
    },
}

impl EthereumCommand {
    /// Execute the Ethereum command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            EthereumSubcommand::New { words, passphrase } => {
                let wallet = Wallet::generate(words, passphrase.as_deref())?;
                let addr = Deriver::new(&wallet).derive()?;
                print_wallet(&wallet, &addr);
            }
            EthereumSubcommand::Import {
                mnemonic,
                passphrase,
            } => {
                let wallet = Wallet::from_mnemonic(&mnemonic, passphrase.as_deref())?;
                let addr = Deriver::new(&wallet).derive()?;
                print_wallet(&wallet, &addr);
            }
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_wallet(wallet: &Wallet, addr: &DerivedAddress) {
    println!();
    println!("      {}  {}", "Mnemonic".cyan().bold(), wallet.mnemonic());
    if wallet.has_passphrase() {
        println!("      {}  {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
    println!("      {}      {}", "Path".cyan().bold(), addr.path.dimmed());
    println!("      {}   {}", "Address".cyan().bold(), addr.address.green());
    println!();
}
