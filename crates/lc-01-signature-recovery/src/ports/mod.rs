//! Ports layer for signer recovery.

pub mod inbound;
