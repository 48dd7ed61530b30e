//! # Hex Encodings
//!
//! JSON-RPC exposes integers as `0x`-prefixed minimal hex quantities and
//! addresses/hashes as `0x`-prefixed lowercase fixed-width hex.

use crate::entities::{Address, Hash, U256};
use crate::errors::EncodingError;

/// `0x`-prefixed minimal hex. Zero encodes as `"0x0"`.
pub fn to_hex_quantity(value: U256) -> String {
    format!("0x{:x}", value)
}

pub fn u64_to_hex_quantity(value: u64) -> String {
    format!("0x{:x}", value)
}

/// `0x`-prefixed lowercase hex of arbitrary bytes. Empty input encodes as `"0x"`.
pub fn to_hex_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn format_address(address: &Address) -> String {
    to_hex_bytes(address)
}

pub fn format_hash(hash: &Hash) -> String {
    to_hex_bytes(hash)
}

fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes hex with an optional `0x` prefix. Case-insensitive.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(strip_prefix(s.trim())).map_err(|e| EncodingError::InvalidHex(e.to_string()))
}

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], EncodingError> {
    let bytes = decode_hex(s)?;
    if bytes.len() != N {
        return Err(EncodingError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Parses a 20-byte address. Mixed-case (checksummed) input is accepted.
pub fn parse_address(s: &str) -> Result<Address, EncodingError> {
    decode_fixed::<20>(s)
}

pub fn parse_hash(s: &str) -> Result<Hash, EncodingError> {
    decode_fixed::<32>(s)
}

/// Parses a hex quantity (`"0x1a"`) into a U256.
pub fn parse_hex_quantity(s: &str) -> Result<U256, EncodingError> {
    let digits = strip_prefix(s.trim());
    if digits.is_empty() {
        return Err(EncodingError::InvalidHex("empty quantity".into()));
    }
    if digits.len() > 64 {
        return Err(EncodingError::QuantityOverflow);
    }
    U256::from_str_radix(digits, 16).map_err(|e| EncodingError::InvalidHex(format!("{:?}", e)))
}
