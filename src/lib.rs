//! Multichain-Address: Address Handling Across EVM, TRON and TON
//!
//! This crate classifies, normalizes and compares addresses from several
//! blockchain families and resolves well-known sentinel addresses:
//!
//! - **Classification** - Pattern-based detection of the address family
//! - **Comparison** - Family-aware equality, zero/native/special checks
//! - **Actions** - Membership, wrapped-native substitution, conditional
//!   replacement, numeric ordering of EVM addresses
//! - **Sentinels** - Zero, burn, native pseudo-addresses and per-network
//!   wrapped-native tokens
//! - **Address** - Validated, immutable value type tying it all together
//!
//! ## Error policy
//!
//! Building an [`Address`] fails with [`AddressError::InvalidAddress`] on
//! empty or unclassifiable input. Every query (`equal`, `is_zero`, `lt`,
//! `in_array`, ...) answers `false` for missing, invalid or cross-family
//! inputs instead of failing.
//!
//! ## Usage
//!
//! ```
//! use multichain_address::{network, Address};
//!
//! let native = Address::evm_native_address();
//! let wrapped = native.require_wrapped(&network::BNB);
//! assert_eq!(wrapped, Address::wrapped_of(&network::BNB));
//! assert!(!wrapped.is_native());
//! ```

pub mod actions;
pub mod address;
pub mod checksum;
pub mod classifier;
pub mod comparator;
pub mod error;
pub mod network;
pub mod select;
pub mod special;

// Re-export commonly used items at the crate root
pub use address::{Address, AddressInput};
pub use classifier::{classify, is_address, AddressFamily};
pub use comparator::{equal, is_native, is_special, is_zero, AddressLike};
pub use error::AddressError;
pub use network::{Network, NetworkKey};
pub use select::NetworkTable;
pub use special::{default_registry, load_from_env, SpecialAddressRegistry};
