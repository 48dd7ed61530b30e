//! # Block Production Subsystem (LC-03)
//!
//! Packages applied transactions into blocks and picks block proposers.
//!
//! ## Components
//!
//! - **BlockAssembler**: Builds a block on top of the current head with the
//!   new state root. Never fails.
//! - **ProposerSelector**: Stake-weighted proposer draw, walked in ascending
//!   address order. Advisory only: nothing enforces that the selected
//!   address actually proposes.
//!
//! ## Time
//!
//! Timestamps come from a [`TimeSource`] port. No monotonicity is enforced;
//! equal or decreasing timestamps across consecutive blocks are accepted.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::time::{ManualTimeSource, SystemTimeSource};
pub use domain::assembler::BlockAssembler;
pub use domain::proposer::{ProposerSelector, DEFAULT_PROPOSER};
pub use ports::outbound::TimeSource;
