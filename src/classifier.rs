//! Address Family Detection
//!
//! Pattern-based classification of address strings into the blockchain
//! family they belong to. Only the shape of the string is checked: no
//! checksum (EIP-55 or base58check) is verified here.
//!
//! ## Patterns
//!
//! Tested in priority order, first match wins:
//!
//! ```text
//! TON raw            0:<64 hex>
//! TON user-friendly  [kEU]<47 base64url>
//! TON generic        <48..51 base64url>
//! EVM                0x<40 hex>
//! TRON               T<33 of [a-zA-Z1-9]>
//! ```
//!
//! The TON patterns go first because the generic base64url shape would
//! otherwise swallow strings the more specific TON patterns describe.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static TON_RAW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0:[a-fA-F0-9]{64}$").expect("TON raw pattern is valid"));

static TON_FRIENDLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[kEU][A-Za-z0-9_-]{47}$").expect("TON friendly pattern is valid"));

static TON_GENERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-zA-Z_-]{48,51}$").expect("TON generic pattern is valid"));

static EVM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("EVM pattern is valid"));

static TRON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T[a-zA-Z1-9]{33}$").expect("TRON pattern is valid"));

/// Blockchain address family
///
/// Families are mutually exclusive: a string classifies to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// TON (The Open Network), raw or base64url encoded
    Ton,
    /// EVM-compatible, `0x` + 40 hex characters
    Evm,
    /// TRON base58, leading `T`
    Tron,
    /// Anything that matches none of the above
    Unknown,
}

impl AddressFamily {
    /// Get the family as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Ton => "ton",
            AddressFamily::Evm => "evm",
            AddressFamily::Tron => "tron",
            AddressFamily::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != AddressFamily::Unknown
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect the address family of `raw`.
///
/// Surrounding whitespace is ignored. Empty input is `Unknown`.
pub fn classify(raw: &str) -> AddressFamily {
    let address = raw.trim();

    if address.is_empty() {
        return AddressFamily::Unknown;
    }

    if TON_RAW_RE.is_match(address)
        || TON_FRIENDLY_RE.is_match(address)
        || TON_GENERIC_RE.is_match(address)
    {
        return AddressFamily::Ton;
    }

    if EVM_RE.is_match(address) {
        return AddressFamily::Evm;
    }

    if TRON_RE.is_match(address) {
        return AddressFamily::Tron;
    }

    AddressFamily::Unknown
}

/// True if `raw` belongs to any supported family
pub fn is_address(raw: &str) -> bool {
    classify(raw).is_known()
}

pub fn is_ton(raw: &str) -> bool {
    classify(raw) == AddressFamily::Ton
}

pub fn is_evm(raw: &str) -> bool {
    classify(raw) == AddressFamily::Evm
}

pub fn is_tron(raw: &str) -> bool {
    classify(raw) == AddressFamily::Tron
}
