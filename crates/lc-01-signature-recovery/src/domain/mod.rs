//! Domain layer for signer recovery.

pub mod ecdsa;
pub mod errors;
pub mod verifier;
pub mod wallet;
