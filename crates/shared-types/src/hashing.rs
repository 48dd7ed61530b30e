//! Keccak-256, the single digest function used across the ledger.

use crate::entities::Hash;
use sha3::{Digest, Keccak256};

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty_input() {
        let expected =
            hex::decode("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
                .unwrap();
        assert_eq!(keccak256(&[]).to_vec(), expected);
    }

    #[test]
    fn test_keccak256_deterministic() {
        assert_eq!(keccak256(b"ledger"), keccak256(b"ledger"));
        assert_ne!(keccak256(b"ledger"), keccak256(b"ledger "));
    }
}
