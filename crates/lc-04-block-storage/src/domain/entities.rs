use shared_types::SignedTransaction;

/// Where a transaction sits in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLocation {
    /// Position of the block in the chain (equal to its block number).
    pub block_index: usize,
    pub block_number: u64,
    /// Index within the block's transaction list.
    pub tx_index: usize,
    pub transaction: SignedTransaction,
}
