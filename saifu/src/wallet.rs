//! Unified wallet type for multi-chain key derivation.

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::{mnemonic, Error};

/// A unified HD wallet that can derive keys for multiple chains.
///
/// The wallet holds a BIP-39 mnemonic and the 64-byte seed derived from it
/// (PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" + passphrase`). The
/// same seed feeds both the secp256k1 (Ethereum) and ed25519 (Solana)
/// derivation flavors.
///
/// # Passphrase Support
///
/// The wallet supports an optional BIP-39 passphrase ("25th word"). The
/// same mnemonic with different passphrases produces completely different
/// wallets.
///
/// Both the mnemonic and the seed are zeroized when the wallet is dropped;
/// nothing is persisted.
pub struct Wallet {
    /// BIP-39 mnemonic phrase.
    mnemonic: Zeroizing<String>,
    /// Seed derived from mnemonic + passphrase.
    seed: Zeroizing<[u8; 64]>,
    /// Whether a passphrase was used.
    has_passphrase: bool,
}

impl Wallet {
    /// Generate a new wallet with a random mnemonic.
    ///
    /// # Arguments
    ///
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    /// * `passphrase` - Optional BIP-39 passphrase for additional security
    ///
    /// # Errors
    ///
    /// Returns an error if the word count is invalid or the system random
    /// source is unavailable.
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self, Error> {
        let parsed = mnemonic::generate_with_word_count(word_count)?;
        Ok(Self::from_parsed(&parsed, passphrase))
    }

    /// Create a wallet from raw entropy bytes.
    ///
    /// # Arguments
    ///
    /// * `entropy` - Raw entropy bytes (16, 20, 24, 28, or 32 bytes)
    /// * `passphrase` - Optional BIP-39 passphrase
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self, Error> {
        let parsed = Mnemonic::from_entropy(entropy)?;
        Ok(Self::from_parsed(&parsed, passphrase))
    }

    /// Create a wallet from an existing mnemonic phrase.
    ///
    /// # Arguments
    ///
    /// * `phrase` - BIP-39 mnemonic phrase
    /// * `passphrase` - Optional BIP-39 passphrase
    ///
    /// # Errors
    ///
    /// Returns an error if the mnemonic is invalid.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self, Error> {
        let parsed = mnemonic::validate(phrase)?;
        Ok(Self::from_parsed(&parsed, passphrase))
    }

    fn from_parsed(mnemonic: &Mnemonic, passphrase: Option<&str>) -> Self {
        let passphrase_str = passphrase.unwrap_or("");
        let seed_bytes = mnemonic.to_seed(passphrase_str);

        Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed: Zeroizing::new(seed_bytes),
            has_passphrase: !passphrase_str.is_empty(),
        }
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security Warning**: Handle this value carefully as it can
    /// reconstruct all derived keys.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Get the seed bytes for key derivation.
    ///
    /// This seed is consumed by the chain-specific derivers (Ethereum,
    /// Solana) to generate addresses along their fixed paths.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// Check if a passphrase was used to derive the seed.
    #[must_use]
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}

// Secrets never reach debug output.
impl core::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &"[REDACTED]")
            .field("seed", &"[REDACTED]")
            .field("has_passphrase", &self.has_passphrase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_12_words() {
        let wallet = Wallet::generate(12, None).unwrap();
        assert_eq!(wallet.word_count(), 12);
        assert!(!wallet.has_passphrase());
    }

    #[test]
    fn test_generate_24_words() {
        let wallet = Wallet::generate(24, None).unwrap();
        assert_eq!(wallet.word_count(), 24);
    }

    #[test]
    fn test_generate_invalid_word_count() {
        let result = Wallet::generate(13, None);
        assert!(matches!(result, Err(Error::InvalidWordCount(13))));
    }

    #[test]
    fn test_from_entropy() {
        // 16 bytes = 12 words
        let wallet = Wallet::from_entropy(&[0u8; 16], None).unwrap();
        assert_eq!(wallet.word_count(), 12);
        assert_eq!(wallet.mnemonic(), TEST_MNEMONIC);
    }

    #[test]
    fn test_invalid_entropy_length() {
        // 15 bytes is invalid (should be 16, 20, 24, 28, or 32)
        let result = Wallet::from_entropy(&[0u8; 15], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_mnemonic() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        assert_eq!(wallet.mnemonic(), TEST_MNEMONIC);
    }

    #[test]
    fn test_seed_reference_vector() {
        // BIP-39 reference vector for the all-zero-entropy mnemonic with
        // an empty passphrase.
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        assert_eq!(
            hex::encode(wallet.seed()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("password")).unwrap();
        assert_ne!(wallet1.seed(), wallet2.seed());
        assert!(wallet2.has_passphrase());
    }

    #[test]
    fn test_debug_output_redacted() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let debug = format!("{wallet:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("abandon"));
    }

    #[test]
    fn test_deterministic_seed() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("test")).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("test")).unwrap();
        assert_eq!(wallet1.seed(), wallet2.seed());
    }
}
