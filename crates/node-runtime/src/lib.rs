//! # Node Runtime Library
//!
//! Wires the subsystems into a running node. The binary in `main.rs` feeds
//! stdin lines to [`NodeRuntime::handle_line`] and prints each response.
//!
//! ## Request Path
//!
//! ```text
//! JSON line ─→ router ─→ EthRpc ─→ ProposingSubmitter ─→ ApplyQueue ─→ StateTransitionService
//!                           │            (logs proposer)     (FIFO)        (single writer)
//!                           └─ reads ─────────────────────────────────────→ read lock
//! ```

pub mod adapters;
pub mod container;
pub mod genesis;

pub use adapters::{ApplyQueue, ProposingSubmitter};
pub use container::{ContainerError, NodeConfig, NodeLedger, SubsystemContainer};

use adapters::apply_queue::DEFAULT_QUEUE_CAPACITY;
use lc_03_block_production::ProposerSelector;
use lc_06_api_gateway::{handle_line, EthRpc, JsonRpcResponse};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub type NodeRpc = EthRpc<NodeLedger, ProposingSubmitter<ApplyQueue>>;

/// The running node.
pub struct NodeRuntime {
    container: SubsystemContainer,
    rpc: NodeRpc,
    apply_worker: JoinHandle<()>,
}

impl NodeRuntime {
    /// Build the subsystems and start the apply queue. Must be called from
    /// within a tokio runtime.
    pub fn start(config: NodeConfig) -> Result<Self, ContainerError> {
        let container = SubsystemContainer::new(config)?;

        let (queue, apply_worker) =
            ApplyQueue::spawn(Arc::clone(&container.ledger), DEFAULT_QUEUE_CAPACITY);
        let submitter = ProposingSubmitter::new(
            queue,
            ProposerSelector::new(),
            container.config.genesis.stakes.clone(),
        );
        let rpc = EthRpc::new(Arc::clone(&container.ledger), submitter);

        info!(
            accounts = container.config.genesis.allocations.len(),
            stakers = container.config.genesis.stakes.len(),
            "Node runtime started"
        );
        Ok(Self {
            container,
            rpc,
            apply_worker,
        })
    }

    pub fn ledger(&self) -> Arc<NodeLedger> {
        Arc::clone(&self.container.ledger)
    }

    pub fn config(&self) -> &NodeConfig {
        &self.container.config
    }

    pub fn rpc(&self) -> &NodeRpc {
        &self.rpc
    }

    /// Handle one JSON-RPC request line and return the serialized response.
    pub async fn handle_line(&self, line: &str) -> String {
        let response = handle_line(&self.rpc, line).await;
        serialize_response(&response)
    }

    /// Stop accepting submissions and wait for queued applies to finish.
    pub async fn shutdown(self) {
        info!("Initiating graceful shutdown...");
        let Self {
            container,
            rpc,
            apply_worker,
        } = self;
        drop(rpc);
        if let Err(e) = apply_worker.await {
            error!("Apply worker terminated abnormally: {}", e);
        }
        info!(blocks = container.ledger.chain_len(), "Shutdown complete");
    }
}

fn serialize_response(response: &JsonRpcResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        error!("Failed to serialize response: {}", e);
        r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Internal error: response serialization failed"}}"#
            .to_string()
    })
}
