//! Ethereum-style JSON-RPC methods.

use crate::domain::codec::decode_raw_transaction;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::TransactionReceipt;
use crate::ports::outbound::TransactionSubmitter;
use lc_02_state_management::LedgerQueries;
use lc_05_state_transition::StateTransitionApi;
use shared_types::{
    decode_hex, format_hash, parse_address, parse_hash, to_hex_quantity, u64_to_hex_quantity,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// The only block tag accepted by state queries.
pub const LATEST_TAG: &str = "latest";

/// Ethereum RPC methods handler
pub struct EthRpc<L: StateTransitionApi, Q: TransactionSubmitter> {
    ledger: Arc<L>,
    submitter: Q,
}

impl<L: StateTransitionApi, Q: TransactionSubmitter> EthRpc<L, Q> {
    pub fn new(ledger: Arc<L>, submitter: Q) -> Self {
        Self { ledger, submitter }
    }

    /// ping - liveness probe
    pub fn ping(&self) -> &'static str {
        "pong"
    }

    /// eth_getTransactionCount - nonce of an account at "latest"
    #[instrument(skip(self))]
    pub fn get_transaction_count(&self, address: &str, block: &str) -> ApiResult<String> {
        require_latest(block)?;
        let address = parse_address(address)?;
        Ok(u64_to_hex_quantity(self.ledger.get_nonce(&address)))
    }

    /// eth_getBalance - balance of an account at "latest"
    #[instrument(skip(self))]
    pub fn get_balance(&self, address: &str, block: &str) -> ApiResult<String> {
        require_latest(block)?;
        let address = parse_address(address)?;
        Ok(to_hex_quantity(self.ledger.get_balance(&address)))
    }

    /// eth_blockNumber - number of the head block
    #[instrument(skip(self))]
    pub fn block_number(&self) -> ApiResult<String> {
        let number = self.ledger.latest_block_number()?;
        Ok(u64_to_hex_quantity(number))
    }

    /// eth_sendRawTransaction - decode, submit, return the tx hash
    #[instrument(skip(self, raw))]
    pub async fn send_raw_transaction(&self, raw: &str) -> ApiResult<String> {
        let bytes = decode_hex(raw)?;
        let tx = decode_raw_transaction(&bytes)?;
        debug!(nonce = tx.nonce, "Decoded raw transaction");

        let tx_hash = self.submitter.submit(tx).await.map_err(|e| {
            warn!(code = e.code, error = %e.message, "Transaction rejected");
            e
        })?;
        Ok(format_hash(&tx_hash))
    }

    /// eth_getTransactionReceipt - location and fields of an applied tx
    #[instrument(skip(self))]
    pub fn get_transaction_receipt(&self, tx_hash: &str) -> ApiResult<TransactionReceipt> {
        let tx_hash = parse_hash(tx_hash)?;
        let location = self.ledger.find_transaction(&tx_hash)?;
        Ok(TransactionReceipt::from(&location))
    }
}

fn require_latest(block: &str) -> ApiResult<()> {
    if block == LATEST_TAG {
        Ok(())
    } else {
        Err(ApiError::invalid_params(format!(
            "only '{}' block parameter is supported, got '{}'",
            LATEST_TAG, block
        )))
    }
}
