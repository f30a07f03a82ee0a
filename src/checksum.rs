//! Keccak-256 and EIP-55 mixed-case checksum display
//!
//! The canonical stored form of an EVM address is lowercase. EIP-55 is only
//! used to render it for display; equality never depends on case.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Render a `0x`-prefixed 40-hex-char address in EIP-55 mixed case.
///
/// Returns `None` if `addr` is not shaped like an EVM address.
pub fn to_checksum_address(addr: &str) -> Option<String> {
    let hex_str = addr.trim().strip_prefix("0x")?;
    if hex_str.len() != 40 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let lower = hex_str.to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        // high nibble for even positions, low nibble for odd
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Some(out)
}
