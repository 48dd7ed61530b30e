//! RPC method handlers.

pub mod eth;
