//! # Adapters
//!
//! Implementations of the api gateway's `TransactionSubmitter` port.

pub mod apply_queue;
pub mod proposing;

pub use apply_queue::ApplyQueue;
pub use proposing::ProposingSubmitter;
