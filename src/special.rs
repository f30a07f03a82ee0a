//! Well-Known Sentinel Addresses
//!
//! Family-scoped sentinels (zero, burn, native pseudo-address, ...) are
//! process-wide constants. Wrapped-native token contracts are network-scoped
//! and live in a [`SpecialAddressRegistry`].
//!
//! The built-in registry is initialized once and never mutated. Custom
//! mappings are built as separate registry values, either in code or from
//! the environment, and passed explicitly to whatever needs them.
//!
//! # Environment Variable Schema
//!
//! ```text
//! WRAPPED_NATIVE_COUNT=2               # Number of overrides
//! WRAPPED_NATIVE_1_NETWORK=bnb         # Network name used as lookup key
//! WRAPPED_NATIVE_1_ADDRESS=0x...       # Wrapped-native token contract
//! WRAPPED_NATIVE_2_NETWORK=sepolia
//! WRAPPED_NATIVE_2_ADDRESS=0x...
//! ```

use eyre::{eyre, Result};
use once_cell::sync::Lazy;

use crate::address::Address;
use crate::error::AddressError;
use crate::network::NetworkKey;
use crate::select::NetworkTable;

// ============================================================================
// Sentinel Literals
// ============================================================================

/// EVM zero address, commonly used as "no address"
pub const EVM_ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// EVM burn address; tokens sent here are out of circulation
pub const EVM_BURN_ADDRESS: &str = "0x000000000000000000000000000000000000dead";

/// Pseudo-address some protocols use for the chain's native currency
pub const EVM_NATIVE_ADDRESS: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

/// TRON zero address (`0x41` followed by twenty zero bytes, base58check)
pub const TRON_ZERO_ADDRESS: &str = "T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb";

/// TRON placeholder used as the target of contract-creation transactions
pub const TRON_CONTRACT_CREATION_ADDRESS: &str = "T9yD14Nj9j7xAB4dbGeiX9h8unkKLxmGkn";

/// TON zero account in bounceable form, used as the native TON sentinel
pub const TON_BOUNCEABLE_NATIVE_ADDRESS: &str = "EQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAM9c";

/// Built-in wrapped-native token contracts, keyed by network name
pub const WRAPPED_NATIVE_ADDRESSES: [(&str, &str); 10] = [
    ("matic", "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
    ("mainnet", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
    ("avalanche", "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
    ("arbitrum", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
    ("optimism", "0x4200000000000000000000000000000000000006"),
    ("bnb", "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
    ("tron", "TNUC9Qb1rRpS5CbWLmNMxXBjyFoydXjWFR"),
    ("base", "0x4200000000000000000000000000000000000006"),
    ("scroll", "0x5300000000000000000000000000000000000004"),
    ("xdai", "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"),
];

// ============================================================================
// Sentinel Singletons
// ============================================================================

static ZERO_ADDRESS: Lazy<Address> = Lazy::new(|| Address::from_trusted(EVM_ZERO_ADDRESS));
static BURN_ADDRESS: Lazy<Address> = Lazy::new(|| Address::from_trusted(EVM_BURN_ADDRESS));
static NATIVE_ADDRESS: Lazy<Address> = Lazy::new(|| Address::from_trusted(EVM_NATIVE_ADDRESS));
static TRON_ZERO: Lazy<Address> = Lazy::new(|| Address::from_trusted(TRON_ZERO_ADDRESS));
static TRON_CONTRACT_CREATION: Lazy<Address> =
    Lazy::new(|| Address::from_trusted(TRON_CONTRACT_CREATION_ADDRESS));
static TON_BOUNCEABLE_NATIVE: Lazy<Address> =
    Lazy::new(|| Address::from_trusted(TON_BOUNCEABLE_NATIVE_ADDRESS));

static DEFAULT_REGISTRY: Lazy<SpecialAddressRegistry> = Lazy::new(SpecialAddressRegistry::builtin);

pub fn zero_address() -> &'static Address {
    &ZERO_ADDRESS
}

pub fn evm_burn_address() -> &'static Address {
    &BURN_ADDRESS
}

pub fn evm_native_address() -> &'static Address {
    &NATIVE_ADDRESS
}

pub fn tron_zero_address() -> &'static Address {
    &TRON_ZERO
}

pub fn tron_contract_creation_address() -> &'static Address {
    &TRON_CONTRACT_CREATION
}

pub fn ton_bounceable_native_address() -> &'static Address {
    &TON_BOUNCEABLE_NATIVE
}

/// The process-wide built-in registry
pub fn default_registry() -> &'static SpecialAddressRegistry {
    &DEFAULT_REGISTRY
}

// ============================================================================
// Registry
// ============================================================================

/// Network-scoped sentinel table
///
/// Unknown networks resolve to the EVM zero address.
#[derive(Debug, Clone)]
pub struct SpecialAddressRegistry {
    wrapped_native: NetworkTable<Address>,
}

impl Default for SpecialAddressRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SpecialAddressRegistry {
    /// Registry populated with the built-in wrapped-native table
    pub fn builtin() -> Self {
        let wrapped_native = WRAPPED_NATIVE_ADDRESSES.iter().fold(
            NetworkTable::new(zero_address().clone()),
            |table, (network, address)| table.with_entry(*network, Address::from_trusted(address)),
        );
        Self { wrapped_native }
    }

    /// Registry with no wrapped-native entries at all
    pub fn empty() -> Self {
        Self {
            wrapped_native: NetworkTable::new(zero_address().clone()),
        }
    }

    /// Builder-style registration of a wrapped-native address
    pub fn with_wrapped_native(mut self, network_name: impl Into<String>, address: Address) -> Self {
        self.set_wrapped_native(network_name, address);
        self
    }

    /// Register (or replace) the wrapped-native address of a network
    pub fn set_wrapped_native(
        &mut self,
        network_name: impl Into<String>,
        address: Address,
    ) -> Option<Address> {
        self.wrapped_native.insert(network_name, address)
    }

    /// Validate and register a wrapped-native address from raw text
    pub fn register_wrapped_native(
        &mut self,
        network_name: &str,
        raw_address: &str,
    ) -> std::result::Result<Option<Address>, AddressError> {
        let network_name = network_name.trim();
        if network_name.is_empty() {
            return Err(AddressError::InvalidConfig(
                "network name must not be empty".to_string(),
            ));
        }
        let address = Address::new(raw_address)?;
        Ok(self.set_wrapped_native(network_name, address))
    }

    /// Wrapped-native token address of `network`, or the zero address
    pub fn wrapped_native_of<K: NetworkKey + ?Sized>(&self, network: &K) -> &Address {
        if !self.wrapped_native.contains(network) {
            tracing::debug!(
                network = network.name(),
                chain_id = network.chain_id(),
                "No wrapped native address registered, falling back to zero address"
            );
        }
        self.wrapped_native.select(network)
    }

    pub fn has_wrapped_native<K: NetworkKey + ?Sized>(&self, network: &K) -> bool {
        self.wrapped_native.contains(network)
    }

    /// Number of networks with a registered wrapped-native address
    pub fn wrapped_native_count(&self) -> usize {
        self.wrapped_native.len()
    }
}

// ============================================================================
// Environment Variable Loading
// ============================================================================

/// Load the built-in registry with overrides from environment variables.
///
/// Returns the built-in registry unchanged if `WRAPPED_NATIVE_COUNT` is not
/// set or is 0.
///
/// Required per override:
/// - `WRAPPED_NATIVE_{N}_NETWORK` - network name
/// - `WRAPPED_NATIVE_{N}_ADDRESS` - wrapped-native token address
pub fn load_from_env() -> Result<SpecialAddressRegistry> {
    load_from_vars(|key| std::env::var(key).ok())
}

/// Same as [`load_from_env`] with a custom variable lookup
pub fn load_from_vars<F>(lookup: F) -> Result<SpecialAddressRegistry>
where
    F: Fn(&str) -> Option<String>,
{
    let mut registry = SpecialAddressRegistry::builtin();

    let count: usize = match lookup("WRAPPED_NATIVE_COUNT") {
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| eyre!("Invalid WRAPPED_NATIVE_COUNT: must be a non-negative integer"))?,
        None => return Ok(registry),
    };

    for i in 1..=count {
        let prefix = format!("WRAPPED_NATIVE_{}", i);

        let network = lookup(&format!("{}_NETWORK", prefix))
            .ok_or_else(|| eyre!("Missing {}_NETWORK", prefix))?;

        let raw_address = lookup(&format!("{}_ADDRESS", prefix))
            .ok_or_else(|| eyre!("Missing {}_ADDRESS", prefix))?;

        let previous = registry
            .register_wrapped_native(&network, &raw_address)
            .map_err(|e| match e {
                AddressError::InvalidAddress(_) => {
                    eyre!("Invalid {}_ADDRESS for network {}: {}", prefix, network, e)
                }
                AddressError::InvalidConfig(_) => eyre!("Invalid {}_NETWORK: {}", prefix, e),
            })?;

        if let Some(previous) = previous {
            tracing::warn!(
                network = %network.trim(),
                previous = %previous,
                replacement = %raw_address.trim(),
                "Overriding built-in wrapped native address"
            );
        }
    }

    tracing::info!(
        overrides = count,
        networks = registry.wrapped_native_count(),
        "Loaded wrapped native address registry"
    );

    Ok(registry)
}
