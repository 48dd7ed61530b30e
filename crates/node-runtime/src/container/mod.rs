//! # Subsystem Container
//!
//! Builds the subsystem instances from a [`NodeConfig`] in dependency order:
//!
//! 1. Signature recovery (chain id from config)
//! 2. Block production (system clock)
//! 3. State transition service owning ledger, commitment and chain
//! 4. Genesis allocations

pub mod config;

pub use config::{ChainConfig, ConfigError, GenesisConfig, LoggingConfig, NodeConfig};

use crate::genesis::{self, GenesisError};
use lc_01_signature_recovery::TransactionVerifier;
use lc_03_block_production::SystemTimeSource;
use lc_05_state_transition::StateTransitionService;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// The ledger as wired in a running node.
pub type NodeLedger = StateTransitionService<TransactionVerifier, SystemTimeSource>;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Genesis(#[from] GenesisError),
}

pub struct SubsystemContainer {
    pub config: NodeConfig,
    pub ledger: Arc<NodeLedger>,
}

impl SubsystemContainer {
    /// Validate `config`, wire the subsystems and seed genesis.
    pub fn new(config: NodeConfig) -> Result<Self, ContainerError> {
        config.validate()?;

        let verifier = match config.chain.chain_id {
            Some(chain_id) => TransactionVerifier::with_chain_id(chain_id),
            None => TransactionVerifier::new(),
        };
        info!(chain_id = ?config.chain.chain_id, "Signature recovery ready");

        let ledger = Arc::new(StateTransitionService::new(verifier, SystemTimeSource));
        genesis::initialize(ledger.as_ref(), &config.genesis)?;

        Ok(Self { config, ledger })
    }
}
