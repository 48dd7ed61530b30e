//! # FIFO Apply Queue
//!
//! A single worker task owns the calls into `StateTransitionApi::apply`.
//! Submitters enqueue a transaction with a oneshot reply channel and await
//! the outcome, so concurrent RPC callers are applied strictly in arrival
//! order.

use lc_05_state_transition::StateTransitionApi;
use lc_06_api_gateway::{ApiError, TransactionSubmitter};
use shared_types::{format_hash, Hash, SignedTransaction};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Default number of transactions waiting for the worker.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

struct ApplyRequest {
    tx: SignedTransaction,
    reply: oneshot::Sender<Result<Hash, ApiError>>,
}

/// Cloneable handle to the apply worker.
#[derive(Clone)]
pub struct ApplyQueue {
    sender: mpsc::Sender<ApplyRequest>,
}

impl ApplyQueue {
    /// Spawn the worker on the current tokio runtime. The worker exits once
    /// every handle has been dropped.
    pub fn spawn<L>(ledger: Arc<L>, capacity: usize) -> (Self, JoinHandle<()>)
    where
        L: StateTransitionApi + 'static,
    {
        let (sender, mut receiver) = mpsc::channel::<ApplyRequest>(capacity.max(1));

        let handle = tokio::spawn(async move {
            info!("Apply queue started");
            while let Some(request) = receiver.recv().await {
                let result = ledger.apply(request.tx).map_err(ApiError::from);
                if request.reply.send(result).is_err() {
                    debug!("Submitter dropped before the apply result was delivered");
                }
            }
            info!("Apply queue stopped");
        });

        (Self { sender }, handle)
    }
}

impl TransactionSubmitter for ApplyQueue {
    fn submit(
        &self,
        tx: SignedTransaction,
    ) -> impl Future<Output = Result<Hash, ApiError>> + Send {
        let sender = self.sender.clone();
        async move {
            let (reply, outcome) = oneshot::channel();
            sender
                .send(ApplyRequest { tx, reply })
                .await
                .map_err(|_| ApiError::resource_unavailable("apply queue closed"))?;

            let tx_hash = outcome
                .await
                .map_err(|_| ApiError::resource_unavailable("apply worker stopped"))??;
            debug!(tx_hash = %format_hash(&tx_hash), "Queued transaction applied");
            Ok(tx_hash)
        }
    }
}
