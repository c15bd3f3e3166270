//! Ethereum address encoding with EIP-55 checksum casing.

use saifu::hash::keccak256;

/// Convert an uncompressed secp256k1 public key to the raw 20-byte address.
///
/// The address is the last 20 bytes of Keccak-256 over the 64-byte public
/// key (the leading 0x04 SEC1 tag is skipped if present).
pub fn public_key_to_address(public_key: &[u8]) -> [u8; 20] {
    let key_bytes = if public_key.len() == 65 && public_key[0] == 0x04 {
        &public_key[1..]
    } else {
        public_key
    };

    let hash = keccak256(key_bytes);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Encode a raw address in checksummed format (EIP-55).
///
/// Casing is taken from Keccak-256 of the lowercase hex digest: a hex
/// letter is uppercased when the corresponding hash nibble is >= 8.
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    let addr_hex = hex::encode(address);
    let hash = keccak256(addr_hex.as_bytes());

    let mut result = String::with_capacity(42);
    result.push_str("0x");

    for (i, c) in addr_hex.chars().enumerate() {
        if c.is_ascii_alphabetic() {
            let hash_nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0xf;
            if hash_nibble >= 8 {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        } else {
            result.push(c);
        }
    }

    result
}
