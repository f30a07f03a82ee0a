//! Per-network value selection
//!
//! A [`NetworkTable`] maps network names to values and always carries a
//! default, so selecting for an unknown network never fails.

use std::collections::HashMap;

use crate::network::NetworkKey;

/// Lookup table keyed by network name with a mandatory fallback value
#[derive(Debug, Clone)]
pub struct NetworkTable<T> {
    entries: HashMap<String, T>,
    default: T,
}

impl<T> NetworkTable<T> {
    /// Create an empty table that answers `default` for every network
    pub fn new(default: T) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    /// Builder-style insert
    pub fn with_entry(mut self, network_name: impl Into<String>, value: T) -> Self {
        self.insert(network_name, value);
        self
    }

    /// Insert or replace the value for a network, returning the previous one
    pub fn insert(&mut self, network_name: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(network_name.into(), value)
    }

    /// Select the value for `network`, or the default if none is registered
    pub fn select<K: NetworkKey + ?Sized>(&self, network: &K) -> &T {
        self.get(network.name()).unwrap_or(&self.default)
    }

    /// Exact-match lookup by name without falling back
    pub fn get(&self, network_name: &str) -> Option<&T> {
        self.entries.get(network_name)
    }

    pub fn contains<K: NetworkKey + ?Sized>(&self, network: &K) -> bool {
        self.entries.contains_key(network.name())
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Registered network names (unordered)
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
