//! Validated multi-chain address value
//!
//! An [`Address`] can only be built from text that classifies to a known
//! family. It stores the canonical form: trimmed, and lowercased for EVM
//! addresses. It never changes after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::actions;
use crate::checksum;
use crate::classifier::{classify, AddressFamily};
use crate::comparator::{self, AddressLike};
use crate::error::AddressError;
use crate::network::NetworkKey;
use crate::special::{self, SpecialAddressRegistry};

/// Input accepted by [`Address::parse`]
///
/// An already-built address passes through untouched; raw text is validated.
#[derive(Debug, Clone)]
pub enum AddressInput<'a> {
    Typed(Address),
    Borrowed(&'a Address),
    Raw(&'a str),
}

impl From<Address> for AddressInput<'_> {
    fn from(address: Address) -> Self {
        AddressInput::Typed(address)
    }
}

impl<'a> From<&'a Address> for AddressInput<'a> {
    fn from(address: &'a Address) -> Self {
        AddressInput::Borrowed(address)
    }
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(raw: &'a str) -> Self {
        AddressInput::Raw(raw)
    }
}

impl<'a> From<&'a String> for AddressInput<'a> {
    fn from(raw: &'a String) -> Self {
        AddressInput::Raw(raw.as_str())
    }
}

/// Blockchain address of a known family in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    value: String,
    family: AddressFamily,
}

impl Address {
    /// Validate and canonicalize `raw`
    pub fn new(raw: &str) -> Result<Self, AddressError> {
        let family = classify(raw);
        if family == AddressFamily::Unknown {
            return Err(AddressError::InvalidAddress(raw.to_string()));
        }
        Ok(Self::canonical(raw, family))
    }

    /// Identity for addresses, validation for raw text
    pub fn parse<'a>(input: impl Into<AddressInput<'a>>) -> Result<Self, AddressError> {
        match input.into() {
            AddressInput::Typed(address) => Ok(address),
            AddressInput::Borrowed(address) => Ok(address.clone()),
            AddressInput::Raw(raw) => Self::new(raw),
        }
    }

    /// Build from a literal known to be valid (sentinel tables)
    pub(crate) fn from_trusted(literal: &str) -> Self {
        let family = classify(literal);
        debug_assert!(family.is_known(), "sentinel literal {literal:?} must classify");
        Self::canonical(literal, family)
    }

    fn canonical(raw: &str, family: AddressFamily) -> Self {
        let trimmed = raw.trim();
        let value = match family {
            AddressFamily::Evm => trimmed.to_ascii_lowercase(),
            _ => trimmed.to_string(),
        };
        Self { value, family }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// EIP-55 mixed-case rendering; `None` outside the EVM family
    pub fn to_checksum(&self) -> Option<String> {
        match self.family {
            AddressFamily::Evm => checksum::to_checksum_address(&self.value),
            _ => None,
        }
    }

    /// Raw 20 bytes of an EVM address
    pub fn to_bytes(&self) -> Option<[u8; 20]> {
        match self.family {
            AddressFamily::Evm => actions::evm_bytes(&self.value),
            _ => None,
        }
    }

    // ========================================================================
    // Type checks
    // ========================================================================

    pub fn is_ton(&self) -> bool {
        self.family == AddressFamily::Ton
    }

    pub fn is_tron(&self) -> bool {
        self.family == AddressFamily::Tron
    }

    pub fn is_ethereum(&self) -> bool {
        self.family == AddressFamily::Evm
    }

    pub fn is_evm(&self) -> bool {
        self.is_ethereum()
    }

    // ========================================================================
    // Comparisons
    // ========================================================================

    pub fn equal_to<A: AddressLike + ?Sized>(&self, other: &A) -> bool {
        comparator::equal(self, other)
    }

    pub fn is_zero(&self) -> bool {
        comparator::is_zero(self)
    }

    pub fn is_native(&self) -> bool {
        comparator::is_native(self)
    }

    pub fn is_special(&self) -> bool {
        comparator::is_special(self)
    }

    /// True if this is the registered wrapped-native token of `network`
    pub fn is_wrapped<K: NetworkKey + ?Sized>(&self, network: &K) -> bool {
        let registry = special::default_registry();
        registry.has_wrapped_native(network) && self.equal_to(registry.wrapped_native_of(network))
    }

    pub fn lt<A: AddressLike + ?Sized>(&self, other: &A) -> bool {
        actions::lt(self, other)
    }

    pub fn gt<A: AddressLike + ?Sized>(&self, other: &A) -> bool {
        actions::gt(self, other)
    }

    pub fn lte<A: AddressLike + ?Sized>(&self, other: &A) -> bool {
        actions::lte(self, other)
    }

    pub fn gte<A: AddressLike + ?Sized>(&self, other: &A) -> bool {
        actions::gte(self, other)
    }

    pub fn in_array<C: AddressLike>(&self, candidates: &[C]) -> bool {
        actions::in_array(self, candidates)
    }

    // ========================================================================
    // Substitutions
    // ========================================================================

    /// Wrapped-native token of `network` if this is a zero or native address
    pub fn require_wrapped<K: NetworkKey + ?Sized>(&self, network: &K) -> Address {
        actions::require_wrapped(self, network)
    }

    pub fn require_wrapped_with<K: NetworkKey + ?Sized>(
        &self,
        registry: &SpecialAddressRegistry,
        network: &K,
    ) -> Address {
        actions::require_wrapped_with(registry, self, network)
    }

    pub fn replace_if<R, F>(&self, replace_if: &R, replacer: F) -> Address
    where
        R: AddressLike + ?Sized,
        F: FnOnce(&Address) -> Address,
    {
        actions::replace_address(self, replace_if, replacer)
    }

    // ========================================================================
    // Sentinels
    // ========================================================================

    pub fn zero_address() -> &'static Address {
        special::zero_address()
    }

    pub fn evm_burn_address() -> &'static Address {
        special::evm_burn_address()
    }

    pub fn evm_native_address() -> &'static Address {
        special::evm_native_address()
    }

    pub fn tron_zero_address() -> &'static Address {
        special::tron_zero_address()
    }

    pub fn tron_contract_creation_address() -> &'static Address {
        special::tron_contract_creation_address()
    }

    pub fn ton_bounceable_native_address() -> &'static Address {
        special::ton_bounceable_native_address()
    }

    /// Wrapped-native token of `network` from the built-in registry
    pub fn wrapped_of<K: NetworkKey + ?Sized>(network: &K) -> Address {
        special::default_registry().wrapped_native_of(network).clone()
    }
}

impl AddressLike for Address {
    fn address_str(&self) -> Option<&str> {
        Some(&self.value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::new(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Address::new(value)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Address::new(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.value
    }
}
