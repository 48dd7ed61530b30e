//! # Signature Recovery Service
//!
//! Binds the domain [`TransactionVerifier`] to the [`SignerRecovery`] port.

use crate::domain::errors::SignatureError;
use crate::domain::verifier::TransactionVerifier;
use crate::ports::inbound::SignerRecovery;
use shared_types::{Address, SignedTransaction};

impl SignerRecovery for TransactionVerifier {
    fn recover(&self, tx: &SignedTransaction) -> Result<Address, SignatureError> {
        TransactionVerifier::recover(self, tx)
    }

    fn recover_batch(&self, txs: &[SignedTransaction]) -> Vec<Result<Address, SignatureError>> {
        TransactionVerifier::recover_batch(self, txs)
    }
}
