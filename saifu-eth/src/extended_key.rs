//! BIP-32 hierarchical deterministic key derivation over secp256k1.

use hmac::{Hmac, Mac};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, PublicKey, Scalar, SecretKey};
use sha2::Sha512;
use zeroize::Zeroize;

use saifu::hdpath::{ChildIndex, DerivationPath};

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const BITCOIN_SEED: &[u8] = b"Bitcoin seed";

/// BIP-32 extended private key.
///
/// Holds the (private key, chain code) pair for one node of the derivation
/// tree. The chain code is zeroized on drop; the secret key zeroizes
/// itself when dropped.
#[derive(Clone)]
pub struct ExtendedPrivateKey {
    /// The underlying secp256k1 private key.
    secret: SecretKey,
    /// Chain code for child key derivation.
    chain_code: [u8; 32],
    /// Depth in the derivation tree (0 for master).
    depth: u8,
}

impl ExtendedPrivateKey {
    /// Generate the master key from a seed.
    ///
    /// Master key = HMAC-SHA512(key = "Bitcoin seed", data = seed); left
    /// 32 bytes are the private key, right 32 bytes the chain code.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed length is outside 16..=64 bytes or the
    /// resulting key is zero or not below the curve order.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::Derivation(format!(
                "seed must be 16 to 64 bytes, got {}",
                seed.len()
            )));
        }

        let mut mac = HmacSha512::new_from_slice(BITCOIN_SEED)
            .map_err(|_| Error::Derivation("HMAC initialization failed".into()))?;
        mac.update(seed);
        let result = mac.finalize().into_bytes();

        let secret = SecretKey::from_slice(&result[..32])
            .map_err(|_| Error::Derivation("master key outside curve order".into()))?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            secret,
            chain_code,
            depth: 0,
        })
    }

    /// Derive the key at the given path, walking each segment with CKDpriv.
    ///
    /// # Errors
    ///
    /// Returns an error if any intermediate key is invalid.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, Error> {
        let mut key = self.clone();
        for &index in path.indices() {
            key = key.derive_child(index)?;
        }
        Ok(key)
    }

    /// Derive a child key at the given index (CKDpriv).
    ///
    /// Hardened segments hash `0x00 || privkey || ser32(index)`, normal
    /// segments hash `compressed_pubkey || ser32(index)`; the child private
    /// key is (parent + IL) mod n.
    ///
    /// # Errors
    ///
    /// Per BIP-32, derivation fails if parse256(IL) is not below the curve
    /// order or the resulting child key is zero. The probability is
    /// negligible but the check is mandatory.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self, Error> {
        if self.depth == u8::MAX {
            return Err(Error::Derivation("maximum derivation depth exceeded".into()));
        }

        let mut mac = HmacSha512::new_from_slice(&self.chain_code)
            .map_err(|_| Error::Derivation("HMAC initialization failed".into()))?;

        if index.is_hardened() {
            mac.update(&[0x00]);
            mac.update(self.secret.to_bytes().as_slice());
        } else {
            let public = self.secret.public_key().to_encoded_point(true);
            mac.update(public.as_bytes());
        }
        mac.update(&index.to_u32().to_be_bytes());

        let result = mac.finalize().into_bytes();

        // from_repr rejects IL >= n rather than reducing it.
        let il: Option<Scalar> =
            Scalar::from_repr(*FieldBytes::from_slice(&result[..32])).into();
        let il = il.ok_or_else(|| {
            Error::Derivation(format!("derived key at index {index} not below curve order"))
        })?;

        let parent: Scalar = *self.secret.to_nonzero_scalar();
        let child = il + parent;

        // from_slice rejects the zero key.
        let secret = SecretKey::from_slice(child.to_bytes().as_slice())
            .map_err(|_| Error::Derivation(format!("derived zero key at index {index}")))?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            secret,
            chain_code,
            depth: self.depth + 1,
        })
    }

    /// Get the corresponding public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        self.secret.public_key()
    }

    /// Get the depth in the derivation tree.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }
}

impl Zeroize for ExtendedPrivateKey {
    fn zeroize(&mut self) {
        // The secret key zeroizes itself when dropped.
        self.chain_code.zeroize();
        self.depth = 0;
    }
}

impl Drop for ExtendedPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("depth", &self.depth)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // BIP-32 test vector 1
    const TEST_SEED_1: &[u8] = &hex_literal::hex!("000102030405060708090a0b0c0d0e0f");

    // Seed for "abandon abandon ... about" with empty passphrase.
    const REFERENCE_SEED: [u8; 64] = hex_literal::hex!(
        "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
    );

    #[test]
    fn test_master_key_vector_1() {
        let master = ExtendedPrivateKey::from_seed(TEST_SEED_1).unwrap();
        assert_eq!(master.depth(), 0);
        assert_eq!(
            master.secret.to_bytes().as_slice(),
            hex_literal::hex!("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35")
        );
        assert_eq!(
            master.chain_code,
            hex_literal::hex!("873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508")
        );
    }

    #[test]
    fn test_derive_ethereum_path() {
        let master = ExtendedPrivateKey::from_seed(&REFERENCE_SEED).unwrap();
        let path = DerivationPath::bip44_ethereum(0, 0, 0).unwrap();
        let child = master.derive_path(&path).unwrap();

        assert_eq!(child.depth(), 5);
        // Published reference child key for this mnemonic and path.
        assert_eq!(
            child.secret.to_bytes().as_slice(),
            hex_literal::hex!("1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727")
        );
    }

    #[test]
    fn test_hardened_and_normal_children_differ() {
        let master = ExtendedPrivateKey::from_seed(TEST_SEED_1).unwrap();
        let hardened = master.derive_child(ChildIndex::hardened(0).unwrap()).unwrap();
        let normal = master.derive_child(ChildIndex::normal(0).unwrap()).unwrap();

        assert_eq!(hardened.depth(), 1);
        assert_eq!(normal.depth(), 1);
        assert_ne!(
            hardened.secret.to_bytes().as_slice(),
            normal.secret.to_bytes().as_slice()
        );
    }

    #[test]
    fn test_rejects_short_seed() {
        let result = ExtendedPrivateKey::from_seed(&[0u8; 8]);
        assert!(matches!(result, Err(Error::Derivation(_))));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let path = DerivationPath::bip44_ethereum(0, 0, 0).unwrap();
        let a = ExtendedPrivateKey::from_seed(&REFERENCE_SEED)
            .unwrap()
            .derive_path(&path)
            .unwrap();
        let b = ExtendedPrivateKey::from_seed(&REFERENCE_SEED)
            .unwrap()
            .derive_path(&path)
            .unwrap();
        assert_eq!(
            a.secret.to_bytes().as_slice(),
            b.secret.to_bytes().as_slice()
        );
    }
}
