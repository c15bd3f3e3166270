//! Solana address derivation from a unified wallet.

use ed25519_dalek::VerifyingKey;
use saifu::{DerivationPath, Wallet};

use crate::slip10::DerivedKey;
use crate::Error;

/// Fixed derivation path for the first Solana account.
pub const DERIVATION_PATH: &str = "m/44'/501'/0'/0'";

/// A derived Solana address.
///
/// Carries only display data; private key material never leaves the
/// derivation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAddress {
    /// Derivation path used (`m/44'/501'/0'/0'`).
    pub path: String,
    /// Solana address (base58 encoded public key).
    pub address: String,
}

/// Solana address deriver over a unified wallet seed.
///
/// # Example
///
/// ```
/// use saifu::Wallet;
/// use saifu_sol::Deriver;
///
/// let wallet = Wallet::generate(12, None).unwrap();
/// let addr = Deriver::new(&wallet).derive().unwrap();
/// assert!(addr.address.len() >= 32 && addr.address.len() <= 44);
/// ```
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a new Solana deriver from a wallet.
    #[inline]
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the first-account address along `m/44'/501'/0'/0'`.
    ///
    /// The 32-byte derived key becomes the ed25519 seed; the base58 of the
    /// verification key is the address.
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails.
    pub fn derive(&self) -> Result<DerivedAddress, Error> {
        let path = DerivationPath::solana(0, 0)?;

        let derived = DerivedKey::derive_path(self.wallet.seed(), &path)?;
        let signing_key = derived.to_signing_key();
        let verifying_key: VerifyingKey = signing_key.verifying_key();

        Ok(DerivedAddress {
            path: path.to_string(),
            address: bs58::encode(verifying_key.as_bytes()).into_string(),
        })
    }
}

/// Derive the Solana public key for a mnemonic phrase.
///
/// This is the string-in, string-out boundary for callers: the mnemonic is
/// validated, the seed derived with an empty passphrase, and only the
/// base58 public key is returned. All intermediate key material is dropped
/// before this function returns.
///
/// # Errors
///
/// Returns [`Error::EmptyMnemonic`] for blank input, [`Error::Core`] for
/// an invalid mnemonic, and [`Error::Derivation`] if key derivation fails.
pub fn derive_public_key(mnemonic: &str) -> Result<String, Error> {
    if mnemonic.trim().is_empty() {
        return Err(Error::EmptyMnemonic);
    }

    let wallet = Wallet::from_mnemonic(mnemonic, None)?;
    Ok(Deriver::new(&wallet).derive()?.address)
}
