//! # Inbound Ports (Driving Ports / API)

use crate::domain::errors::TransitionError;
use lc_02_state_management::LedgerQueries;
use lc_04_block_storage::TransactionLocation;
use shared_types::{Address, Block, Hash, SignedTransaction, U256};

/// The state transition API consumed by the RPC layer and the node runtime.
///
/// Implementations must serialize every mutating call.
pub trait StateTransitionApi: LedgerQueries {
    /// Applies one signed transaction as one block. Returns the tx hash.
    fn apply(&self, tx: SignedTransaction) -> Result<Hash, TransitionError>;

    /// Recovers signers in parallel, then applies in input order.
    fn apply_batch(&self, txs: Vec<SignedTransaction>) -> Vec<Result<Hash, TransitionError>>;

    /// Credits genesis balances and commits the initial state. Optionally
    /// appends block 0 with no transactions. Returns the initial state root.
    fn initialize_genesis(
        &self,
        allocations: &[(Address, U256)],
        create_genesis_block: bool,
    ) -> Result<Hash, TransitionError>;

    fn find_transaction(&self, tx_hash: &Hash) -> Result<TransactionLocation, TransitionError>;

    /// Number of the head block. Fails with `NotFound` on an empty chain.
    fn latest_block_number(&self) -> Result<u64, TransitionError>;

    fn block(&self, number: u64) -> Result<Block, TransitionError>;

    fn chain_len(&self) -> usize;
}
