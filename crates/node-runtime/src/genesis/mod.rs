//! # Genesis Module
//!
//! Seeds the ledger before the node accepts transactions.
//!
//! - Every allocation is credited to its account
//! - The initial state root is committed, so `state_root` queries succeed
//!   immediately
//! - Block 0 (sentinel parent, no transactions) is appended only when
//!   `create_genesis_block` is set; otherwise the first applied transaction
//!   becomes block 0

use crate::container::config::GenesisConfig;
use lc_05_state_transition::{StateTransitionApi, TransitionError};
use shared_types::{format_address, format_hash, Hash};
use thiserror::Error;
use tracing::{debug, info};

/// Genesis initialization errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// The ledger already holds committed state or blocks.
    #[error("Ledger already initialized")]
    AlreadyInitialized,

    /// Crediting an allocation or appending block 0 failed.
    #[error("Failed to initialize genesis state: {0}")]
    StateInitFailed(TransitionError),
}

/// Apply `config` to an empty ledger and return the initial state root.
pub fn initialize<L: StateTransitionApi>(
    ledger: &L,
    config: &GenesisConfig,
) -> Result<Hash, GenesisError> {
    for (address, amount) in &config.allocations {
        debug!(account = %format_address(address), %amount, "Genesis allocation");
    }

    let state_root = ledger
        .initialize_genesis(&config.allocations, config.create_genesis_block)
        .map_err(|e| match e {
            TransitionError::AlreadyInitialized => GenesisError::AlreadyInitialized,
            other => GenesisError::StateInitFailed(other),
        })?;

    info!(
        accounts = config.allocations.len(),
        state_root = %format_hash(&state_root),
        "Genesis state committed"
    );
    Ok(state_root)
}
