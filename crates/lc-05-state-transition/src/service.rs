//! # State Transition Service
//!
//! Owns the ledger, its commitment and the chain behind one
//! `parking_lot::RwLock`. Every mutation holds the write lock for its full
//! duration; reads share the read lock.

use crate::domain::errors::TransitionError;
use crate::ports::inbound::StateTransitionApi;
use lc_01_signature_recovery::SignerRecovery;
use lc_02_state_management::{LedgerQueries, LedgerState, MerkleCommitment};
use lc_03_block_production::{BlockAssembler, TimeSource};
use lc_04_block_storage::{Chain, TransactionLocation};
use parking_lot::RwLock;
use shared_types::{format_address, format_hash, Address, Block, Hash, SignedTransaction, U256};
use tracing::{info, warn};

/// Everything mutated by an apply.
#[derive(Debug, Default)]
struct LedgerCore {
    ledger: LedgerState,
    commitment: MerkleCommitment,
    chain: Chain,
}

pub struct StateTransitionService<V: SignerRecovery, T: TimeSource> {
    verifier: V,
    assembler: BlockAssembler<T>,
    core: RwLock<LedgerCore>,
}

impl<V: SignerRecovery, T: TimeSource> StateTransitionService<V, T> {
    pub fn new(verifier: V, time_source: T) -> Self {
        Self {
            verifier,
            assembler: BlockAssembler::new(time_source),
            core: RwLock::new(LedgerCore::default()),
        }
    }

    /// Applies one transaction: recover, transfer, rebuild, assemble, append.
    #[tracing::instrument(
        skip(self, tx),
        fields(nonce = tx.nonce, tx_hash = %format_hash(&tx.hash()))
    )]
    pub fn apply(&self, tx: SignedTransaction) -> Result<Hash, TransitionError> {
        let sender = self.verifier.recover(&tx).map_err(|e| {
            warn!(error = %e, "Rejected transaction: invalid signature");
            TransitionError::from(e)
        })?;

        let mut core = self.core.write();
        self.commit(&mut core, sender, tx, |parent, txs, root| {
            self.assembler.assemble(parent, txs, root)
        })
    }

    /// Recovers every signer on the worker pool, then applies in input order
    /// under a single write lock.
    #[tracing::instrument(skip(self, txs), fields(batch_size = txs.len()))]
    pub fn apply_batch(&self, txs: Vec<SignedTransaction>) -> Vec<Result<Hash, TransitionError>> {
        let senders = self.verifier.recover_batch(&txs);

        let mut core = self.core.write();
        txs.into_iter()
            .zip(senders)
            .map(|(tx, sender)| match sender {
                Ok(sender) => self.commit(&mut core, sender, tx, |parent, txs, root| {
                    self.assembler.assemble(parent, txs, root)
                }),
                Err(e) => {
                    warn!(nonce = tx.nonce, error = %e, "Rejected transaction: invalid signature");
                    Err(e.into())
                }
            })
            .collect()
    }

    /// Steps (2) to (5). Caller holds the write lock.
    fn commit<F>(
        &self,
        core: &mut LedgerCore,
        sender: Address,
        tx: SignedTransaction,
        assemble: F,
    ) -> Result<Hash, TransitionError>
    where
        F: FnOnce(Option<&Block>, Vec<SignedTransaction>, Hash) -> Block,
    {
        let tx_hash = tx.hash();
        let nonce = tx.nonce;

        let journal = core
            .ledger
            .apply_transfer(sender, tx.to, tx.value, tx.nonce)
            .map_err(|e| {
                warn!(sender = %format_address(&sender), nonce, error = %e, "Rejected transaction");
                TransitionError::from(e)
            })?;

        let prior_commitment = core.commitment;
        let state_root = core.commitment.rebuild(&core.ledger.snapshot());

        let block = assemble(core.chain.head(), vec![tx], state_root);
        let block_number = block.number();

        if let Err(e) = core.chain.append(block) {
            core.ledger.revert(journal);
            core.commitment = prior_commitment;
            warn!(
                sender = %format_address(&sender),
                nonce,
                error = %e,
                "Block append failed, transfer rolled back"
            );
            return Err(e.into());
        }

        info!(
            sender = %format_address(&sender),
            nonce,
            block_number,
            tx_hash = %format_hash(&tx_hash),
            state_root = %format_hash(&state_root),
            "Committed transaction"
        );
        Ok(tx_hash)
    }

    /// Credits `allocations`, commits the initial root and optionally
    /// appends block 0. Fails if the ledger was already committed or the
    /// chain is non-empty. On failure nothing is written.
    #[tracing::instrument(skip(self, allocations), fields(accounts = allocations.len()))]
    pub fn initialize_genesis(
        &self,
        allocations: &[(Address, U256)],
        create_genesis_block: bool,
    ) -> Result<Hash, TransitionError> {
        let mut core = self.core.write();
        if core.commitment.is_initialized() || !core.chain.is_empty() {
            return Err(TransitionError::AlreadyInitialized);
        }

        let mut ledger = core.ledger.clone();
        for (address, amount) in allocations {
            ledger.credit(*address, *amount)?;
        }

        let mut commitment = core.commitment;
        let state_root = commitment.rebuild(&ledger.snapshot());

        if create_genesis_block {
            let block = self.assembler.assemble(None, vec![], state_root);
            core.chain.append(block)?;
        }
        core.ledger = ledger;
        core.commitment = commitment;

        info!(
            state_root = %format_hash(&state_root),
            genesis_block = create_genesis_block,
            "Genesis initialized"
        );
        Ok(state_root)
    }

    pub fn get_balance(&self, address: &Address) -> U256 {
        self.core.read().ledger.get_balance(address)
    }

    pub fn get_nonce(&self, address: &Address) -> u64 {
        self.core.read().ledger.get_nonce(address)
    }

    /// Latest committed root. Fails with `NotInitialized` before the first
    /// commit.
    pub fn state_root(&self) -> Result<Hash, TransitionError> {
        Ok(self.core.read().commitment.root()?)
    }

    pub fn head(&self) -> Option<Block> {
        self.core.read().chain.head().cloned()
    }

    pub fn block(&self, number: u64) -> Result<Block, TransitionError> {
        Ok(self.core.read().chain.block(number)?.clone())
    }

    pub fn chain_len(&self) -> usize {
        self.core.read().chain.len()
    }

    pub fn latest_block_number(&self) -> Result<u64, TransitionError> {
        let core = self.core.read();
        let head = core
            .chain
            .head()
            .ok_or(lc_04_block_storage::ChainError::Empty)?;
        Ok(head.number())
    }

    pub fn find_transaction(&self, tx_hash: &Hash) -> Result<TransactionLocation, TransitionError> {
        Ok(self.core.read().chain.find_transaction_by_hash(tx_hash)?)
    }
}

impl<V: SignerRecovery, T: TimeSource> LedgerQueries for StateTransitionService<V, T> {
    fn get_balance(&self, address: &Address) -> U256 {
        StateTransitionService::get_balance(self, address)
    }

    fn get_nonce(&self, address: &Address) -> u64 {
        StateTransitionService::get_nonce(self, address)
    }

    fn state_root(&self) -> Option<Hash> {
        StateTransitionService::state_root(self).ok()
    }
}

impl<V: SignerRecovery, T: TimeSource> StateTransitionApi for StateTransitionService<V, T> {
    fn apply(&self, tx: SignedTransaction) -> Result<Hash, TransitionError> {
        StateTransitionService::apply(self, tx)
    }

    fn apply_batch(&self, txs: Vec<SignedTransaction>) -> Vec<Result<Hash, TransitionError>> {
        StateTransitionService::apply_batch(self, txs)
    }

    fn initialize_genesis(
        &self,
        allocations: &[(Address, U256)],
        create_genesis_block: bool,
    ) -> Result<Hash, TransitionError> {
        StateTransitionService::initialize_genesis(self, allocations, create_genesis_block)
    }

    fn find_transaction(&self, tx_hash: &Hash) -> Result<TransactionLocation, TransitionError> {
        StateTransitionService::find_transaction(self, tx_hash)
    }

    fn latest_block_number(&self) -> Result<u64, TransitionError> {
        StateTransitionService::latest_block_number(self)
    }

    fn block(&self, number: u64) -> Result<Block, TransitionError> {
        StateTransitionService::block(self, number)
    }

    fn chain_len(&self) -> usize {
        StateTransitionService::chain_len(self)
    }
}
