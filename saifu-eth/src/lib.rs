//! Ethereum address derivation for saifu.
//!
//! Derives a secp256k1 keypair from a [`saifu::Wallet`] seed via BIP-32
//! along the fixed path `m/44'/60'/0'/0/0` and encodes the EIP-55
//! checksummed address. Only the address string leaves this crate; private
//! key material is zeroized as soon as the address is computed.
//!
//! # Usage
//!
//! ```
//! let address = saifu_eth::derive_address(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! ).unwrap();
//! assert_eq!(address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![forbid(unsafe_code)]

pub mod address;
mod deriver;
mod error;
mod extended_key;

pub use deriver::{derive_address, DerivedAddress, Deriver, DERIVATION_PATH};
pub use error::Error;
pub use extended_key::ExtendedPrivateKey;

/// A convenient Result type alias for saifu-eth operations.
pub type Result<T> = core::result::Result<T, Error>;
