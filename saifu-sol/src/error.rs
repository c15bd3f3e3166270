//! Error types for Solana wallet operations.

use core::fmt;

/// Errors that can occur during Solana address derivation.
#[derive(Debug)]
pub enum Error {
    /// The supplied mnemonic phrase was empty or whitespace-only.
    EmptyMnemonic,
    /// Mnemonic validation or seed derivation failed.
    Core(saifu::Error),
    /// Key derivation failed.
    Derivation(String),
    /// The path contained a non-hardened segment; ed25519 SLIP-0010
    /// derivation supports hardened segments only.
    NonHardenedIndex(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMnemonic => write!(f, "mnemonic phrase is empty"),
            Self::Core(e) => write!(f, "{e}"),
            Self::Derivation(msg) => write!(f, "key derivation error: {msg}"),
            Self::NonHardenedIndex(i) => {
                write!(f, "index {i} is not hardened, ed25519 derivation requires hardened segments")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<saifu::Error> for Error {
    fn from(err: saifu::Error) -> Self {
        Self::Core(err)
    }
}
