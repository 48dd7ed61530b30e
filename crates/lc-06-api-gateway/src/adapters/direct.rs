use crate::domain::error::ApiError;
use crate::ports::outbound::TransactionSubmitter;
use lc_05_state_transition::StateTransitionApi;
use shared_types::{Hash, SignedTransaction};
use std::future::Future;
use std::sync::Arc;

/// Applies on the caller's task, relying on the service's own lock for
/// serialization.
pub struct DirectSubmitter<L: StateTransitionApi> {
    ledger: Arc<L>,
}

impl<L: StateTransitionApi> DirectSubmitter<L> {
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }
}

impl<L: StateTransitionApi> Clone for DirectSubmitter<L> {
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
        }
    }
}

impl<L: StateTransitionApi> TransactionSubmitter for DirectSubmitter<L> {
    fn submit(
        &self,
        tx: SignedTransaction,
    ) -> impl Future<Output = Result<Hash, ApiError>> + Send {
        let ledger = Arc::clone(&self.ledger);
        async move { ledger.apply(tx).map_err(ApiError::from) }
    }
}
