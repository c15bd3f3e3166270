//! Ethereum address derivation from a unified wallet.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use saifu::{DerivationPath, Wallet};

use crate::address::{public_key_to_address, to_checksum_address};
use crate::extended_key::ExtendedPrivateKey;
use crate::Error;

/// Fixed derivation path for the first Ethereum account.
pub const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// A derived Ethereum address.
///
/// Carries only display data; private key material never leaves the
/// derivation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAddress {
    /// Derivation path used (`m/44'/60'/0'/0/0`).
    pub path: String,
    /// Checksummed Ethereum address (EIP-55).
    pub address: String,
}

/// Ethereum address deriver over a unified wallet seed.
///
/// # Example
///
/// ```
/// use saifu::Wallet;
/// use saifu_eth::Deriver;
///
/// let wallet = Wallet::generate(12, None).unwrap();
/// let addr = Deriver::new(&wallet).derive().unwrap();
/// assert!(addr.address.starts_with("0x"));
/// ```
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a new Ethereum deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the first-account address along `m/44'/60'/0'/0/0`.
    ///
    /// # Errors
    ///
    /// Returns an error if an intermediate key is invalid (negligible
    /// probability, still checked).
    pub fn derive(&self) -> Result<DerivedAddress, Error> {
        let path = DerivationPath::bip44_ethereum(0, 0, 0)?;

        let master = ExtendedPrivateKey::from_seed(self.wallet.seed())?;
        let child = master.derive_path(&path)?;

        let public_key = child.public_key().to_encoded_point(false);
        let address = public_key_to_address(public_key.as_bytes());

        Ok(DerivedAddress {
            path: path.to_string(),
            address: to_checksum_address(&address),
        })
    }
}

/// Derive the Ethereum address for a mnemonic phrase.
///
/// This is the string-in, string-out boundary for callers: the mnemonic is
/// validated, the seed derived with an empty passphrase, and only the
/// EIP-55 checksummed address is returned. All intermediate key material
/// is dropped before this function returns.
///
/// # Errors
///
/// Returns [`Error::EmptyMnemonic`] for blank input, [`Error::Core`] for
/// an invalid mnemonic, and [`Error::Derivation`] if key derivation fails.
pub fn derive_address(mnemonic: &str) -> Result<String, Error> {
    if mnemonic.trim().is_empty() {
        return Err(Error::EmptyMnemonic);
    }

    let wallet = Wallet::from_mnemonic(mnemonic, None)?;
    Ok(Deriver::new(&wallet).derive()?.address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_derive_known_vector() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let addr = Deriver::new(&wallet).derive().unwrap();

        assert_eq!(addr.path, DERIVATION_PATH);
        assert_eq!(addr.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }

    #[test]
    fn test_derive_address_format() {
        let wallet = Wallet::generate(12, None).unwrap();
        let addr = Deriver::new(&wallet).derive().unwrap();

        assert!(addr.address.starts_with("0x"));
        assert_eq!(addr.address.len(), 42);
    }

    #[test]
    fn test_deterministic_derivation() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();

        let addr1 = Deriver::new(&wallet1).derive().unwrap();
        let addr2 = Deriver::new(&wallet2).derive().unwrap();

        assert_eq!(addr1.address, addr2.address);
    }

    #[test]
    fn test_passphrase_changes_address() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("password")).unwrap();

        let addr1 = Deriver::new(&wallet1).derive().unwrap();
        let addr2 = Deriver::new(&wallet2).derive().unwrap();

        assert_ne!(addr1.address, addr2.address);
    }

    #[test]
    fn test_derive_address_boundary() {
        let address = derive_address(TEST_MNEMONIC).unwrap();
        assert_eq!(address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }

    #[test]
    fn test_empty_mnemonic_rejected() {
        assert!(matches!(derive_address(""), Err(Error::EmptyMnemonic)));
        assert!(matches!(derive_address("   "), Err(Error::EmptyMnemonic)));
    }

    #[test]
    fn test_invalid_mnemonic_rejected() {
        let result = derive_address("not a valid mnemonic phrase at all");
        assert!(matches!(result, Err(Error::Core(_))));
    }
}
