//! Derivation path support.
//!
//! Provides structured parsing and construction of hierarchical
//! deterministic key derivation paths like "m/44'/60'/0'/0/0". The chain
//! adapters walk these typed paths instead of re-parsing strings.

use crate::error::Error;
use core::fmt;

/// A child index in a derivation path.
///
/// Can be either normal (non-hardened) or hardened.
/// Hardened indices are >= 2^31 in raw form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1
    Normal(u32),
    /// Hardened index: displayed as n' or nh, stored as n
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub const fn normal(index: u32) -> Result<Self, Error> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index.
    pub const fn hardened(index: u32) -> Result<Self, Error> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value (without hardened flag).
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Convert to the raw u32 value used in child key derivation.
    ///
    /// For hardened indices, this includes the hardened offset (2^31).
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{}", i),
            Self::Hardened(i) => write!(f, "{}'", i),
        }
    }
}

impl core::str::FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();

        if s.ends_with('\'') || s.ends_with('h') || s.ends_with('H') {
            let index: u32 = s[..s.len() - 1]
                .parse()
                .map_err(|_| Error::InvalidDerivationPath)?;
            Self::hardened(index)
        } else {
            let index: u32 = s.parse().map_err(|_| Error::InvalidDerivationPath)?;
            Self::normal(index)
        }
    }
}

/// A hierarchical deterministic derivation path.
///
/// Represents paths like "m/44'/60'/0'/0/0" as a sequence of child indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    /// The sequence of child indices in the path.
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// Create an empty derivation path (master key).
    pub fn master() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Parse a derivation path from a string.
    ///
    /// Supports formats like:
    /// - "m/44'/60'/0'/0/0"
    /// - "m/44h/60h/0h/0/0"
    /// - "44'/60'/0'/0/0"
    pub fn parse(path: &str) -> Result<Self, Error> {
        let path = path.trim();

        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::master());
        }

        let path = if path.starts_with("m/") || path.starts_with("M/") {
            &path[2..]
        } else {
            path
        };

        let mut indices = Vec::new();

        for component in path.split('/') {
            if component.is_empty() {
                continue;
            }

            let index: ChildIndex = component.parse()?;
            indices.push(index);
        }

        Ok(Self { indices })
    }

    /// Get the child indices in this path.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Get the number of levels in this path.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Check if this path is empty (master key).
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if every index in the path is hardened.
    pub fn is_fully_hardened(&self) -> bool {
        self.indices.iter().all(ChildIndex::is_hardened)
    }

    /// Create BIP-44 path: m/44'/coin_type'/account'/change/address_index
    pub fn bip44(
        coin_type: u32,
        account: u32,
        change: u32,
        address_index: u32,
    ) -> Result<Self, Error> {
        Ok(Self {
            indices: vec![
                ChildIndex::hardened(44)?,
                ChildIndex::hardened(coin_type)?,
                ChildIndex::hardened(account)?,
                ChildIndex::normal(change)?,
                ChildIndex::normal(address_index)?,
            ],
        })
    }

    /// Create BIP-44 Ethereum path: m/44'/60'/account'/change/address_index
    pub fn bip44_ethereum(account: u32, change: u32, address_index: u32) -> Result<Self, Error> {
        Self::bip44(60, account, change, address_index)
    }

    /// Create the Solana path: m/44'/501'/account'/change'
    ///
    /// All segments are hardened, as required by ed25519 derivation.
    pub fn solana(account: u32, change: u32) -> Result<Self, Error> {
        Ok(Self {
            indices: vec![
                ChildIndex::hardened(44)?,
                ChildIndex::hardened(501)?,
                ChildIndex::hardened(account)?,
                ChildIndex::hardened(change)?,
            ],
        })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

impl Default for DerivationPath {
    fn default() -> Self {
        Self::master()
    }
}
