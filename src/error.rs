//! Error types for address construction and registry configuration
//!
//! Construction is the only place the core fails. Every predicate and
//! comparison answers `false` for inputs it cannot make sense of.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input is empty or does not match any supported address family
    #[error("Invalid address: {0:?} does not match any supported address format")]
    InvalidAddress(String),

    /// A wrapped-native override could not be applied
    #[error("Invalid wrapped-native configuration: {0}")]
    InvalidConfig(String),
}

impl AddressError {
    /// Returns true for construction failures caused by the address text itself
    pub fn is_invalid_address(&self) -> bool {
        matches!(self, AddressError::InvalidAddress(_))
    }
}
