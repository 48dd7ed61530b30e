//! # Node Configuration
//!
//! Unified configuration for the ledger node.
//!
//! ## Environment Overrides
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `LC_CHAIN_ID` | enforce EIP-155 `v` values for this chain id |
//! | `LC_LOG` | tracing filter directive (falls back to `RUST_LOG`) |
//! | `LC_GENESIS_BLOCK` | `true`/`false`, append an empty block 0 at genesis |
//! | `LC_FUND` | `<address>:<decimal amount>`, comma separated |

use shared_types::{format_address, parse_address, Address, U256};
use std::collections::HashSet;
use thiserror::Error;

/// The account funded by [`NodeConfig::devnet`].
pub const DEVNET_ACCOUNT: &str = "0x4709421b04e70e3925dfc86307727b588709c7bb";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },

    #[error("Duplicate genesis allocation for {0}")]
    DuplicateAllocation(String),

    #[error("Duplicate stake entry for {0}")]
    DuplicateStake(String),
}

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    pub chain: ChainConfig,
    pub genesis: GenesisConfig,
    pub logging: LoggingConfig,
}

/// Chain parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainConfig {
    /// When set, EIP-155 style `v` values must encode exactly this id.
    pub chain_id: Option<u64>,
}

/// Initial ledger contents.
#[derive(Debug, Clone, Default)]
pub struct GenesisConfig {
    /// Initial balances.
    pub allocations: Vec<(Address, U256)>,
    /// Proposer stakes. Consulted per submission, never enforced.
    pub stakes: Vec<(Address, u64)>,
    /// Append an empty block 0 at genesis.
    pub create_genesis_block: bool,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl NodeConfig {
    /// Development network: one funded account holding 9 * 10^18 units,
    /// which is also the only staked proposer.
    pub fn devnet() -> Self {
        // The constant is a well-formed address literal.
        let account = parse_address(DEVNET_ACCOUNT).unwrap_or_default();
        Self {
            chain: ChainConfig::default(),
            genesis: GenesisConfig {
                allocations: vec![(account, U256::exp10(18) * U256::from(9u64))],
                stakes: vec![(account, 1)],
                create_genesis_block: false,
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Devnet defaults with process environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::devnet();
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("LC_CHAIN_ID") {
            let id = value
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid("LC_CHAIN_ID", &value))?;
            self.chain.chain_id = Some(id);
        }

        if let Some(filter) = lookup("LC_LOG").or_else(|| lookup("RUST_LOG")) {
            self.logging.filter = filter;
        }

        if let Some(value) = lookup("LC_GENESIS_BLOCK") {
            self.genesis.create_genesis_block = match value.trim() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid("LC_GENESIS_BLOCK", &value)),
            };
        }

        if let Some(value) = lookup("LC_FUND") {
            self.genesis.allocations = parse_fund_list(&value)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (address, _) in &self.genesis.allocations {
            if !seen.insert(*address) {
                return Err(ConfigError::DuplicateAllocation(format_address(address)));
            }
        }

        seen.clear();
        for (address, _) in &self.genesis.stakes {
            if !seen.insert(*address) {
                return Err(ConfigError::DuplicateStake(format_address(address)));
            }
        }

        Ok(())
    }
}

fn parse_fund_list(value: &str) -> Result<Vec<(Address, U256)>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (address, amount) = entry
                .split_once(':')
                .ok_or_else(|| invalid("LC_FUND", entry))?;
            let address = parse_address(address.trim()).map_err(|_| invalid("LC_FUND", entry))?;
            let amount =
                U256::from_dec_str(amount.trim()).map_err(|_| invalid("LC_FUND", entry))?;
            Ok((address, amount))
        })
        .collect()
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnv {
        var: var.to_string(),
        value: value.to_string(),
    }
}
