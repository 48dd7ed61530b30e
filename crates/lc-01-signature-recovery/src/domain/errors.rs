//! # Signature Errors

use thiserror::Error;

/// Errors that can occur while recovering a transaction signer.
///
/// Every variant is reported to callers as an invalid signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// `v` does not normalize into {0, 1}.
    #[error("Invalid recovery id: v = {0}")]
    InvalidRecoveryId(String),

    /// `v` encodes a chain id other than the configured one.
    #[error("Chain id mismatch: expected {expected}, signature encodes v = {v}")]
    ChainIdMismatch { expected: u64, v: String },

    /// `r` or `s` is zero, or not below the curve order.
    #[error("Invalid signature format")]
    InvalidFormat,

    /// `s` lies in the upper half of the curve order.
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Public-key recovery failed for this digest.
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// A private key could not be parsed or used for signing.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
