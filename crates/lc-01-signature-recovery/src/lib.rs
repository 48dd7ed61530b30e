//! # Signature Recovery Subsystem (LC-01)
//!
//! Recovers the sender of a signed transaction from its `(v, r, s)`
//! signature. The sender address is never transmitted; it is always derived.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `v` normalization, secp256k1 public-key
//!   recovery, address derivation, wallet signing. No I/O.
//! - **Ports Layer** (`ports/`): the `SignerRecovery` trait consumed by the
//!   state transition subsystem.
//! - **Service Layer** (`service.rs`): binds `TransactionVerifier` to the port.
//!
//! ## Security Notes
//!
//! - **Malleability**: signatures with `s > n/2` are rejected.
//! - **Chain id**: when a verifier is configured with a chain id, EIP-155
//!   style `v` values for any other chain are rejected. The chain id is not
//!   part of the signed digest.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::ecdsa::{address_from_pubkey, normalize_v, recover_signer};
pub use domain::errors::SignatureError;
pub use domain::verifier::TransactionVerifier;
pub use domain::wallet::Wallet;
pub use ports::inbound::SignerRecovery;
