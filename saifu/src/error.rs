//! Error types for core wallet operations.

use core::fmt;

/// Errors that can occur during mnemonic handling and seed derivation.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid mnemonic phrase (bad checksum, unknown word, bad length).
    Mnemonic(bip39::Error),
    /// Invalid word count for mnemonic generation.
    InvalidWordCount(usize),
    /// The operating system random source failed or is unavailable.
    EntropySource,
    /// Invalid derivation path segment.
    InvalidDerivationPath,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mnemonic(e) => write!(f, "mnemonic error: {e}"),
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::EntropySource => write!(f, "system random source unavailable"),
            Self::InvalidDerivationPath => write!(f, "invalid derivation path"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mnemonic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::Mnemonic(err)
    }
}
