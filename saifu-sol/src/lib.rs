//! Solana address derivation for saifu.
//!
//! Derives an ed25519 keypair from a [`saifu::Wallet`] seed via SLIP-0010
//! hardened-only derivation along the fixed path `m/44'/501'/0'/0'` and
//! encodes the base58 public key. Only the address string leaves this
//! crate; private key material is zeroized as soon as the address is
//! computed.
//!
//! # Usage
//!
//! ```
//! let address = saifu_sol::derive_public_key(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! ).unwrap();
//! assert_eq!(address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![forbid(unsafe_code)]

mod deriver;
mod error;
mod slip10;

pub use deriver::{derive_public_key, DerivedAddress, Deriver, DERIVATION_PATH};
pub use error::Error;
pub use slip10::DerivedKey;

/// A convenient Result type alias for saifu-sol operations.
pub type Result<T> = core::result::Result<T, Error>;
