//! # lc-02-state-management
//!
//! Account state for Ledger-Chain.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: `LedgerState` exclusively owns every
//!   balance and nonce. Its only transaction-driven mutator is
//!   `apply_transfer`.
//! - **State Commitment**: `MerkleCommitment` is rebuilt from a full ledger
//!   snapshot after every mutation; only its root is observable.
//!
//! ```text
//! [State Transition (5)] ──apply_transfer──→ [LedgerState]
//!            │                                     │ snapshot()
//!            │                                     ↓
//!            └──────────rebuild───────────→ [MerkleCommitment] ──root──→ block header
//! ```
//!
//! Neither type is synchronized. The state transition subsystem holds both
//! behind one lock.

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
