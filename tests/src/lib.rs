//! # Ledger-Chain Test Suite
//!
//! Cross-subsystem tests. Unit tests live next to the code in each crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs   # verifier → ledger → commitment → chain
//!     └── rpc.rs     # JSON-RPC lines through the node runtime
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lc-tests
//! cargo test -p lc-tests integration::rpc::
//! cargo bench -p lc-tests
//! ```

pub mod integration;
