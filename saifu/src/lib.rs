//! # Saifu - Deterministic Multi-Chain Address Derivation
//!
//! Core types for deriving blockchain account addresses from a BIP-39
//! mnemonic phrase. This crate covers the chain-independent half of the
//! pipeline: mnemonic generation and validation, seed derivation, and
//! typed derivation paths. Chain-specific key construction lives in the
//! `saifu-eth` and `saifu-sol` adapter crates.
//!
//! ## Example
//!
//! ```
//! use saifu::Wallet;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//! assert_eq!(wallet.seed().len(), 64);
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod hdpath;
pub mod mnemonic;
mod wallet;

pub use error::Error;
pub use hdpath::{ChildIndex, DerivationPath};
pub use wallet::Wallet;
