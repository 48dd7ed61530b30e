//! # Block Storage Subsystem (LC-04)
//!
//! An append-only, contiguous, in-memory sequence of blocks numbered from 0.
//! No reorgs and no removal.
//!
//! ## Linkage
//!
//! `append` rejects a block unless its parent hash equals the current head's
//! hash (or the genesis sentinel on an empty chain) and its number equals
//! the chain length.
//!
//! ## Lookups
//!
//! `find_transaction_by_hash` is a linear scan that recomputes every
//! transaction hash. Cost grows with total transactions stored.

pub mod domain;

pub use domain::chain::Chain;
pub use domain::entities::TransactionLocation;
pub use domain::errors::ChainError;
