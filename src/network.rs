//! Network Identity
//!
//! Networks are only ever used as lookup keys: the address core reads the
//! name and never interprets anything else about a network.
//!
//! Names follow the conventional short names used by EVM tooling
//! (`mainnet`, `bnb`, `matic`, ...). Non-EVM chains get pseudo chain IDs
//! outside the range registered EVM chains use.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Anything that can identify a network in a lookup table
pub trait NetworkKey {
    /// Stable network name used for table lookups
    fn name(&self) -> &str;

    /// Numeric chain ID (pseudo ID for non-EVM chains)
    fn chain_id(&self) -> u64;
}

/// A named network with its chain ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Network {
    name: Cow<'static, str>,
    chain_id: u64,
}

impl Network {
    /// Create a network with an owned name
    pub fn new(name: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            chain_id,
        }
    }

    /// Create a network from a static name (usable in constants)
    pub const fn from_static(name: &'static str, chain_id: u64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            chain_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// True for the built-in pseudo networks of non-EVM chains
    pub fn is_pseudo(&self) -> bool {
        self.chain_id >= PSEUDO_CHAIN_ID_BASE
    }
}

impl NetworkKey for Network {
    fn name(&self) -> &str {
        &self.name
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

impl<T: NetworkKey + ?Sized> NetworkKey for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn chain_id(&self) -> u64 {
        (**self).chain_id()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.chain_id)
    }
}

/// Pseudo chain IDs for non-EVM networks start here
pub const PSEUDO_CHAIN_ID_BASE: u64 = 9_990_000;

// ============================================================================
// EVM Networks
// ============================================================================

pub const MAINNET: Network = Network::from_static("mainnet", 1);
pub const OPTIMISM: Network = Network::from_static("optimism", 10);
pub const BNB: Network = Network::from_static("bnb", 56);
pub const GNOSIS: Network = Network::from_static("xdai", 100);
pub const MATIC: Network = Network::from_static("matic", 137);
pub const BASE: Network = Network::from_static("base", 8453);
pub const ARBITRUM: Network = Network::from_static("arbitrum", 42161);
pub const AVALANCHE: Network = Network::from_static("avalanche", 43114);
pub const SCROLL: Network = Network::from_static("scroll", 534352);

// ============================================================================
// Pseudo Networks (non-EVM)
// ============================================================================

pub const TON: Network = Network::from_static("ton", PSEUDO_CHAIN_ID_BASE + 1);
pub const TRON: Network = Network::from_static("tron", PSEUDO_CHAIN_ID_BASE + 2);

static EVM_NETWORKS: [Network; 9] = [
    BNB, OPTIMISM, MATIC, ARBITRUM, MAINNET, AVALANCHE, BASE, SCROLL, GNOSIS,
];

static ALL_NETWORKS: [Network; 11] = [
    BNB, OPTIMISM, MATIC, ARBITRUM, MAINNET, AVALANCHE, BASE, SCROLL, GNOSIS, TON, TRON,
];

/// All built-in EVM networks
pub fn evm_networks() -> &'static [Network] {
    &EVM_NETWORKS
}

/// All built-in networks, EVM first, then pseudo networks
pub fn all_networks() -> &'static [Network] {
    &ALL_NETWORKS
}

/// Look up a built-in network by exact name
pub fn find_by_name(name: &str) -> Option<&'static Network> {
    ALL_NETWORKS.iter().find(|n| n.name() == name)
}

/// Look up a built-in network by chain ID
pub fn find_by_chain_id(chain_id: u64) -> Option<&'static Network> {
    ALL_NETWORKS.iter().find(|n| n.chain_id() == chain_id)
}
