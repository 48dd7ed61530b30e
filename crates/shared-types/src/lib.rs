//! # Shared Types Crate
//!
//! This crate contains the domain entities shared by every Ledger-Chain
//! subsystem, plus the hex encodings used at the JSON-RPC boundary.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Sender Is Recovered, Never Stored**: A `SignedTransaction` carries no
//!   `from` field; the signer is derived from `(v, r, s)` by
//!   signature recovery.
//! - **Fixed Encodings**: Transaction and block hashes are computed over
//!   fixed-width, order-sensitive byte layouts (see [`entities`]).

pub mod encoding;
pub mod entities;
pub mod errors;
pub mod hashing;

pub use encoding::*;
pub use entities::*;
pub use errors::*;
pub use hashing::keccak256;
