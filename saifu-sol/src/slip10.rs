//! SLIP-0010 ed25519 key derivation.
//!
//! Implements SLIP-0010 for deriving ed25519 keys from a seed.
//! Reference: <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use saifu::hdpath::{ChildIndex, DerivationPath};

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const ED25519_SEED: &[u8] = b"ed25519 seed";

/// SLIP-0010 derived key pair (private key + chain code).
///
/// Both halves are zeroized on drop.
pub struct DerivedKey {
    /// 32-byte private key.
    private_key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Derive the master key from a seed.
    ///
    /// Master key = HMAC-SHA512(key = "ed25519 seed", data = seed); left
    /// 32 bytes are the private key, right 32 bytes the chain code.
    ///
    /// # Errors
    ///
    /// Returns an error if HMAC initialization fails.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let mut mac = HmacSha512::new_from_slice(ED25519_SEED)
            .map_err(|_| Error::Derivation("HMAC initialization failed".into()))?;
        mac.update(seed);
        let result = mac.finalize().into_bytes();

        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        private_key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            private_key,
            chain_code,
        })
    }

    /// Derive the child key at a hardened index.
    ///
    /// Child = HMAC-SHA512(key = chain code,
    /// data = 0x00 || parent_key || ser32(index | 0x80000000)).
    ///
    /// # Errors
    ///
    /// Returns an error if HMAC initialization fails.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, Error> {
        let hardened_index = index | ChildIndex::HARDENED_OFFSET;

        let mut mac = HmacSha512::new_from_slice(&*self.chain_code)
            .map_err(|_| Error::Derivation("HMAC initialization failed".into()))?;

        mac.update(&[0x00]);
        mac.update(&*self.private_key);
        mac.update(&hardened_index.to_be_bytes());

        let result = mac.finalize().into_bytes();

        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        private_key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            private_key,
            chain_code,
        })
    }

    /// Derive the key at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonHardenedIndex`] if any segment is not hardened;
    /// SLIP-0010 defines no normal derivation for ed25519.
    pub fn derive_path(seed: &[u8], path: &DerivationPath) -> Result<Self, Error> {
        let mut key = Self::from_seed(seed)?;
        for &index in path.indices() {
            match index {
                ChildIndex::Hardened(i) => key = key.derive_hardened(i)?,
                ChildIndex::Normal(i) => return Err(Error::NonHardenedIndex(i)),
            }
        }
        Ok(key)
    }

    /// Expand the derived key into an ed25519 signing key.
    #[must_use]
    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.private_key)
    }
}

impl core::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DerivedKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SLIP-0010 test vector 1 for ed25519.
    const TEST_SEED_1: &[u8] = &hex_literal::hex!("000102030405060708090a0b0c0d0e0f");

    #[test]
    fn test_master_key_vector_1() {
        let master = DerivedKey::from_seed(TEST_SEED_1).unwrap();
        assert_eq!(
            master.private_key.as_slice(),
            hex_literal::hex!("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7")
        );
        assert_eq!(
            master.chain_code.as_slice(),
            hex_literal::hex!("90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb")
        );
    }

    #[test]
    fn test_hardened_child_vector_1() {
        // m/0' from SLIP-0010 test vector 1.
        let master = DerivedKey::from_seed(TEST_SEED_1).unwrap();
        let child = master.derive_hardened(0).unwrap();
        assert_eq!(
            child.private_key.as_slice(),
            hex_literal::hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3")
        );
        assert_eq!(
            child.chain_code.as_slice(),
            hex_literal::hex!("8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69")
        );
    }

    #[test]
    fn test_derive_solana_path() {
        // Seed for "abandon abandon ... about" with empty passphrase.
        let seed = hex_literal::hex!(
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
        let path = DerivationPath::solana(0, 0).unwrap();
        let derived = DerivedKey::derive_path(&seed, &path).unwrap();
        assert_eq!(
            derived.private_key.as_slice(),
            hex_literal::hex!("37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445")
        );
    }

    #[test]
    fn test_non_hardened_segment_rejected() {
        let path = DerivationPath::bip44_ethereum(0, 0, 0).unwrap();
        let result = DerivedKey::derive_path(&[0u8; 64], &path);
        assert!(matches!(result, Err(Error::NonHardenedIndex(0))));
    }
}
