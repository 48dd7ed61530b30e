//! # Domain Errors

use shared_types::{format_hash, Hash};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The block's parent hash is not the current head's hash.
    #[error(
        "Broken parent link: expected {}, got {}",
        format_hash(expected),
        format_hash(actual)
    )]
    BrokenParentLink { expected: Hash, actual: Hash },

    /// The block's number is not the chain length.
    #[error("Unexpected block number: expected {expected}, got {actual}")]
    UnexpectedBlockNumber { expected: u64, actual: u64 },

    #[error("Transaction not found: {}", format_hash(tx_hash))]
    TransactionNotFound { tx_hash: Hash },

    #[error("Block not found: number {number}")]
    BlockNotFound { number: u64 },

    /// The chain has no blocks.
    #[error("Chain is empty")]
    Empty,
}
