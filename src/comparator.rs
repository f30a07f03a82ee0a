//! Family-aware address comparison
//!
//! Every function here is total: missing, empty, unclassifiable or
//! cross-family inputs answer `false` instead of failing.

use crate::classifier::{classify, AddressFamily};
use crate::special::{
    EVM_BURN_ADDRESS, EVM_NATIVE_ADDRESS, EVM_ZERO_ADDRESS, TON_BOUNCEABLE_NATIVE_ADDRESS,
    TRON_CONTRACT_CREATION_ADDRESS, TRON_ZERO_ADDRESS,
};

/// Anything that may carry address text
///
/// `None` stands in for a missing value and never matches anything.
pub trait AddressLike {
    fn address_str(&self) -> Option<&str>;
}

impl AddressLike for str {
    fn address_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl AddressLike for String {
    fn address_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: AddressLike + ?Sized> AddressLike for &T {
    fn address_str(&self) -> Option<&str> {
        (**self).address_str()
    }
}

impl<T: AddressLike> AddressLike for Option<T> {
    fn address_str(&self) -> Option<&str> {
        self.as_ref().and_then(|inner| inner.address_str())
    }
}

/// Family of an address-like value; missing values are `Unknown`
pub fn family_of<A: AddressLike + ?Sized>(address: &A) -> AddressFamily {
    address
        .address_str()
        .map(classify)
        .unwrap_or(AddressFamily::Unknown)
}

/// Compare two addresses under their family's rules.
///
/// EVM addresses compare case-insensitively. TON and TRON compare exactly.
/// Surrounding whitespace is ignored for all families.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: AddressLike + ?Sized,
    B: AddressLike + ?Sized,
{
    let (Some(a), Some(b)) = (a.address_str(), b.address_str()) else {
        return false;
    };

    let family = classify(a);
    if family == AddressFamily::Unknown || family != classify(b) {
        return false;
    }

    let (a, b) = (a.trim(), b.trim());
    match family {
        AddressFamily::Evm => a.eq_ignore_ascii_case(b),
        _ => a == b,
    }
}

/// Zero address of the EVM or TRON family
pub fn is_zero<A: AddressLike + ?Sized>(address: &A) -> bool {
    equal(address, EVM_ZERO_ADDRESS) || equal(address, TRON_ZERO_ADDRESS)
}

/// EVM zero address or the EVM native-currency pseudo-address
pub fn is_native<A: AddressLike + ?Sized>(address: &A) -> bool {
    equal(address, EVM_ZERO_ADDRESS) || equal(address, EVM_NATIVE_ADDRESS)
}

/// Any sentinel of the address's own family
pub fn is_special<A: AddressLike + ?Sized>(address: &A) -> bool {
    match family_of(address) {
        AddressFamily::Evm => {
            equal(address, EVM_ZERO_ADDRESS)
                || equal(address, EVM_NATIVE_ADDRESS)
                || equal(address, EVM_BURN_ADDRESS)
        }
        AddressFamily::Ton => equal(address, TON_BOUNCEABLE_NATIVE_ADDRESS),
        AddressFamily::Tron => {
            equal(address, TRON_ZERO_ADDRESS) || equal(address, TRON_CONTRACT_CREATION_ADDRESS)
        }
        AddressFamily::Unknown => false,
    }
}
