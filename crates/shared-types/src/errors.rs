//! # Error Types
//!
//! Errors raised while decoding values that cross the RPC boundary.

use thiserror::Error;

/// Errors produced when parsing hex-encoded addresses, hashes and quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The input is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded value has the wrong byte length.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A quantity does not fit in 256 bits.
    #[error("Quantity overflows 256 bits")]
    QuantityOverflow,
}
