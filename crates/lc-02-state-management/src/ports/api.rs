//! # Ledger Ports
//!
//! Read-side queries against the ledger.

use shared_types::{Address, Hash, U256};

/// Read-only ledger queries.
///
/// Implemented by whatever owns the ledger behind its lock. Reads may run
/// concurrently with each other but never overlap a mutation.
pub trait LedgerQueries: Send + Sync {
    fn get_balance(&self, address: &Address) -> U256;

    fn get_nonce(&self, address: &Address) -> u64;

    /// Latest committed state root, or `None` before the first rebuild.
    fn state_root(&self) -> Option<Hash>;
}
