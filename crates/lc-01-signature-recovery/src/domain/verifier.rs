//! # Transaction Verifier
//!
//! Recovers the sender of a [`SignedTransaction`] from its signature over
//! the canonical `nonce ‖ to ‖ value` digest.

use super::ecdsa::{normalize_v, recover_signer};
use super::errors::SignatureError;
use rayon::prelude::*;
use shared_types::{Address, SignedTransaction};
use tracing::trace;

/// Stateless signer recovery, optionally pinned to a chain id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionVerifier {
    chain_id: Option<u64>,
}

impl TransactionVerifier {
    /// A verifier that accepts any EIP-155 chain id.
    pub fn new() -> Self {
        Self { chain_id: None }
    }

    /// A verifier that rejects EIP-155 `v` values for other chains.
    pub fn with_chain_id(chain_id: u64) -> Self {
        Self {
            chain_id: Some(chain_id),
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    /// Recovers the sender address. Pure; no side effects.
    pub fn recover(&self, tx: &SignedTransaction) -> Result<Address, SignatureError> {
        let recovery_id = normalize_v(tx.v, self.chain_id)?;
        let digest = tx.signing_hash();
        let sender = recover_signer(&digest, recovery_id, tx.r, tx.s)?;
        trace!(nonce = tx.nonce, recovery_id, "Recovered transaction signer");
        Ok(sender)
    }

    /// Recovers every sender on the rayon pool. Output order matches input order.
    pub fn recover_batch(
        &self,
        txs: &[SignedTransaction],
    ) -> Vec<Result<Address, SignatureError>> {
        txs.par_iter().map(|tx| self.recover(tx)).collect()
    }
}
