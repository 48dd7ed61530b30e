//! # State Transition Subsystem (LC-05)
//!
//! Orchestrates one signed transaction into one block:
//!
//! ```text
//! SignedTransaction
//!       │ (1) SignerRecovery::recover          ← outside the lock
//!       ↓
//! ┌──────────────── write lock ────────────────┐
//! │ (2) LedgerState::apply_transfer            │
//! │ (3) MerkleCommitment::rebuild              │
//! │ (4) BlockAssembler::assemble(head, [tx])   │
//! │ (5) Chain::append                          │
//! └────────────────────────────────────────────┘
//!       ↓
//!    tx hash
//! ```
//!
//! ## Atomicity
//!
//! Failures at (1) or (2) return before anything is written. A failure at
//! (5) reverts the ledger through its transfer journal and restores the
//! previous commitment before the lock is released. Readers take the read
//! lock and so never observe a transfer without its block.
//!
//! Exactly one transaction per block.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::errors::{ErrorKind, TransitionError};
pub use ports::inbound::StateTransitionApi;
pub use service::StateTransitionService;
