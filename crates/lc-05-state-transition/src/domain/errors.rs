//! # Transition Errors
//!
//! Every failure of the apply pipeline, with a flat [`ErrorKind`] for
//! callers that only need the category.

use lc_01_signature_recovery::SignatureError;
use lc_02_state_management::{CommitmentError, StateError};
use lc_04_block_storage::ChainError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Commitment(#[from] CommitmentError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Genesis may only run against an empty ledger and chain.
    #[error("Genesis already initialized")]
    AlreadyInitialized,
}

/// Error taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidSignature,
    InvalidNonce,
    InsufficientBalance,
    BalanceOverflow,
    NotInitialized,
    NotFound,
    BrokenLinkage,
    AlreadyInitialized,
}

impl TransitionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransitionError::InvalidSignature(_) => ErrorKind::InvalidSignature,
            TransitionError::State(StateError::InvalidNonce { .. }) => ErrorKind::InvalidNonce,
            TransitionError::State(StateError::InsufficientBalance { .. }) => {
                ErrorKind::InsufficientBalance
            }
            TransitionError::State(StateError::BalanceOverflow { .. })
            | TransitionError::State(StateError::NonceOverflow { .. }) => {
                ErrorKind::BalanceOverflow
            }
            TransitionError::Commitment(CommitmentError::NotInitialized) => {
                ErrorKind::NotInitialized
            }
            TransitionError::Chain(ChainError::BrokenParentLink { .. })
            | TransitionError::Chain(ChainError::UnexpectedBlockNumber { .. }) => {
                ErrorKind::BrokenLinkage
            }
            TransitionError::Chain(ChainError::TransactionNotFound { .. })
            | TransitionError::Chain(ChainError::BlockNotFound { .. })
            | TransitionError::Chain(ChainError::Empty) => ErrorKind::NotFound,
            TransitionError::AlreadyInitialized => ErrorKind::AlreadyInitialized,
        }
    }

    /// Whether resubmitting the same transaction later could succeed.
    ///
    /// Only a balance shortfall can resolve itself (the sender may be
    /// funded). A nonce rejection is final for that transaction.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::InsufficientBalance)
    }
}
