//! # Inbound Ports (Driving Ports / API)
//!
//! The recovery API consumed by the state transition subsystem.

use crate::domain::errors::SignatureError;
use shared_types::{Address, SignedTransaction};

/// Signer recovery.
///
/// Implementations must be pure and thread-safe (`Send + Sync`): recovery is
/// the one step allowed to run outside the ledger's write lock.
pub trait SignerRecovery: Send + Sync {
    /// Recovers the sender of `tx`.
    fn recover(&self, tx: &SignedTransaction) -> Result<Address, SignatureError>;

    /// Recovers many senders, possibly in parallel. Output order matches input.
    fn recover_batch(&self, txs: &[SignedTransaction]) -> Vec<Result<Address, SignatureError>> {
        txs.iter().map(|tx| self.recover(tx)).collect()
    }
}
