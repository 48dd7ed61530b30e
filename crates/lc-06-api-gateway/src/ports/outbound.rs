//! # Outbound Ports (Driven Ports / SPI)

use crate::domain::error::ApiError;
use shared_types::{Hash, SignedTransaction};
use std::future::Future;

/// Hands a decoded transaction to whatever serializes applies.
///
/// Ledger rejections arrive already mapped to JSON-RPC errors; a submitter
/// that cannot reach the ledger reports `RESOURCE_UNAVAILABLE`.
///
/// The node runtime routes this through its FIFO apply queue; tests can
/// apply directly with [`crate::DirectSubmitter`].
pub trait TransactionSubmitter: Send + Sync {
    fn submit(
        &self,
        tx: SignedTransaction,
    ) -> impl Future<Output = Result<Hash, ApiError>> + Send;
}
