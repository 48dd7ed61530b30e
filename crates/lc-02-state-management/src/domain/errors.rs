//! # State Errors

use shared_types::{format_address, Address, U256};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Invalid nonce: expected {expected}, got {actual}")]
    InvalidNonce { expected: u64, actual: u64 },

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    #[error("Balance overflow crediting {}", format_address(address))]
    BalanceOverflow { address: Address },

    #[error("Nonce overflow for {}", format_address(address))]
    NonceOverflow { address: Address },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// `root()` was called before the first `rebuild()`.
    #[error("Merkle commitment not initialized")]
    NotInitialized,
}
