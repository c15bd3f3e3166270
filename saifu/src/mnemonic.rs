//! BIP-39 mnemonic generation and validation.
//!
//! Entropy comes from the operating system CSPRNG; an unavailable random
//! source surfaces as [`Error::EntropySource`] instead of a panic.
//! Validation checks word count, wordlist membership, and the embedded
//! checksum, and is side-effect-free.

use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::Error;

/// Generate a new 12-word English mnemonic from 128 bits of OS entropy.
///
/// # Errors
///
/// Returns [`Error::EntropySource`] if the system random source fails.
pub fn generate() -> Result<Mnemonic, Error> {
    generate_with_word_count(12)
}

/// Generate a mnemonic with the given word count.
///
/// # Arguments
///
/// * `word_count` - Number of words (12, 15, 18, 21, or 24)
///
/// # Errors
///
/// Returns [`Error::InvalidWordCount`] for any other word count and
/// [`Error::EntropySource`] if the system random source fails.
pub fn generate_with_word_count(word_count: usize) -> Result<Mnemonic, Error> {
    let entropy_len = match word_count {
        12 => 16,
        15 => 20,
        18 => 24,
        21 => 28,
        24 => 32,
        _ => return Err(Error::InvalidWordCount(word_count)),
    };

    let mut entropy = Zeroizing::new([0u8; 32]);
    OsRng
        .try_fill_bytes(&mut entropy[..entropy_len])
        .map_err(|_| Error::EntropySource)?;

    Ok(Mnemonic::from_entropy(&entropy[..entropy_len])?)
}

/// Validate a mnemonic phrase and return the parsed mnemonic.
///
/// # Errors
///
/// Returns [`Error::Mnemonic`] if the word count is not one of the five
/// allowed lengths, a word is not in the wordlist, or the embedded
/// checksum does not match the recomputed entropy.
pub fn validate(phrase: &str) -> Result<Mnemonic, Error> {
    Ok(phrase.parse::<Mnemonic>()?)
}
