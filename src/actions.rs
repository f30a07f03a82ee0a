//! Address actions: membership, wrapped-native substitution, conditional
//! replacement and numeric ordering of EVM addresses.

use crate::address::Address;
use crate::classifier::{classify, AddressFamily};
use crate::comparator::{self, AddressLike};
use crate::network::NetworkKey;
use crate::special::{default_registry, SpecialAddressRegistry};

/// Case-insensitive membership test.
///
/// Missing or empty candidates are skipped.
pub fn in_array<A, C>(address: &A, candidates: &[C]) -> bool
where
    A: AddressLike + ?Sized,
    C: AddressLike,
{
    let Some(needle) = normalized(address) else {
        return false;
    };

    candidates
        .iter()
        .filter_map(|candidate| normalized(candidate))
        .any(|candidate| candidate == needle)
}

fn normalized<A: AddressLike + ?Sized>(address: &A) -> Option<String> {
    address
        .address_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Replace zero and native pseudo-addresses with the wrapped-native token of
/// `network`, using the built-in registry.
pub fn require_wrapped<K: NetworkKey + ?Sized>(address: &Address, network: &K) -> Address {
    require_wrapped_with(default_registry(), address, network)
}

/// [`require_wrapped`] against an explicit registry
pub fn require_wrapped_with<K: NetworkKey + ?Sized>(
    registry: &SpecialAddressRegistry,
    address: &Address,
    network: &K,
) -> Address {
    if comparator::is_zero(address) || comparator::is_native(address) {
        let wrapped = registry.wrapped_native_of(network);
        tracing::debug!(
            address = %address,
            wrapped = %wrapped,
            network = network.name(),
            "Substituting native address with wrapped native token"
        );
        return wrapped.clone();
    }
    address.clone()
}

/// Return `replacer(address)` if `address` equals `replace_if`, else `address`
pub fn replace_address<R, F>(address: &Address, replace_if: &R, replacer: F) -> Address
where
    R: AddressLike + ?Sized,
    F: FnOnce(&Address) -> Address,
{
    if comparator::equal(address, replace_if) {
        replacer(address)
    } else {
        address.clone()
    }
}

/// Decode both sides to raw bytes if, and only if, both are EVM addresses.
///
/// Fixed-width big-endian bytes compare the same way the numbers they
/// encode do.
fn evm_pair<A, B>(a: &A, b: &B) -> Option<([u8; 20], [u8; 20])>
where
    A: AddressLike + ?Sized,
    B: AddressLike + ?Sized,
{
    let (a, b) = (a.address_str()?, b.address_str()?);
    if classify(a) != AddressFamily::Evm || classify(b) != AddressFamily::Evm {
        return None;
    }
    Some((evm_bytes(a)?, evm_bytes(b)?))
}

pub(crate) fn evm_bytes(addr: &str) -> Option<[u8; 20]> {
    let hex_str = addr.trim().strip_prefix("0x")?;
    let mut out = [0u8; 20];
    hex::decode_to_slice(hex_str, &mut out).ok()?;
    Some(out)
}

/// Numeric `a < b` for two EVM addresses; `false` for anything else
pub fn lt<A, B>(a: &A, b: &B) -> bool
where
    A: AddressLike + ?Sized,
    B: AddressLike + ?Sized,
{
    evm_pair(a, b).is_some_and(|(a, b)| a < b)
}

/// Numeric `a > b` for two EVM addresses; `false` for anything else
pub fn gt<A, B>(a: &A, b: &B) -> bool
where
    A: AddressLike + ?Sized,
    B: AddressLike + ?Sized,
{
    evm_pair(a, b).is_some_and(|(a, b)| a > b)
}

/// `equal(a, b) || lt(a, b)`
pub fn lte<A, B>(a: &A, b: &B) -> bool
where
    A: AddressLike + ?Sized,
    B: AddressLike + ?Sized,
{
    comparator::equal(a, b) || lt(a, b)
}

/// `equal(a, b) || gt(a, b)`
pub fn gte<A, B>(a: &A, b: &B) -> bool
where
    A: AddressLike + ?Sized,
    B: AddressLike + ?Sized,
{
    comparator::equal(a, b) || gt(a, b)
}
