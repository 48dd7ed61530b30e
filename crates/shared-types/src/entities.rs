//! # Core Domain Entities
//!
//! Types shared by every subsystem. Subsystems depend on these definitions,
//! never on each other's internal types.
//!
//! ## Fixed Encodings
//!
//! | Value | Layout | Bytes |
//! |-------|--------|-------|
//! | Transaction payload | `nonce (U256 BE) ‖ to ‖ value (U256 BE)` | 84 |
//! | Block header | `parent_hash ‖ timestamp (u64 BE) ‖ block_number (u64 BE) ‖ state_root` | 80 |
//!
//! Both the transaction signing digest and the transaction hash are
//! `keccak256(payload)`. The block hash is `keccak256(header bytes)` and does
//! not cover the transaction list.

use crate::hashing::keccak256;
use serde::{Deserialize, Serialize};

pub use primitive_types::U256;

/// A 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// A 20-byte account address: the low-order 20 bytes of the Keccak-256 hash
/// of an uncompressed secp256k1 public key.
pub type Address = [u8; 20];

/// Parent hash carried by block 0.
pub const GENESIS_PARENT_HASH: Hash = [0u8; 32];

/// Length of the canonical transaction payload.
pub const TX_PAYLOAD_LEN: usize = 32 + 20 + 32;

/// Length of the serialized block header.
pub const HEADER_ENCODED_LEN: usize = 32 + 8 + 8 + 32;

/// Builds the canonical, order-sensitive transaction payload.
pub fn transaction_payload(nonce: u64, to: &Address, value: U256) -> [u8; TX_PAYLOAD_LEN] {
    let mut out = [0u8; TX_PAYLOAD_LEN];
    U256::from(nonce).to_big_endian(&mut out[..32]);
    out[32..52].copy_from_slice(to);
    value.to_big_endian(&mut out[52..]);
    out
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Transaction fields before signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: U256,
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
}

impl UnsignedTransaction {
    /// The digest a signer signs.
    pub fn signing_hash(&self) -> Hash {
        keccak256(&transaction_payload(self.nonce, &self.to, self.value))
    }

    /// Attaches signature components.
    pub fn into_signed(self, v: U256, r: U256, s: U256) -> SignedTransaction {
        SignedTransaction {
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            to: self.to,
            value: self.value,
            data: self.data,
            v,
            r,
            s,
        }
    }
}

/// A signed legacy transaction.
///
/// The sender is not stored. It is recovered from `(v, r, s)` over
/// [`SignedTransaction::signing_hash`]. Gas fields and `data` are carried
/// through to receipts but have no effect on state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: U256,
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

impl SignedTransaction {
    /// Canonical payload: `nonce ‖ to ‖ value`.
    pub fn payload(&self) -> [u8; TX_PAYLOAD_LEN] {
        transaction_payload(self.nonce, &self.to, self.value)
    }

    /// Digest the signature was produced over.
    pub fn signing_hash(&self) -> Hash {
        keccak256(&self.payload())
    }

    /// Transaction hash used for lookups and returned to RPC callers.
    ///
    /// Identical to the signing digest: two transactions that differ only in
    /// signature or gas fields share a hash.
    pub fn hash(&self) -> Hash {
        self.signing_hash()
    }
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub parent_hash: Hash,
    /// Unix seconds. Not required to be monotonic across blocks.
    pub timestamp: u64,
    pub block_number: u64,
    pub state_root: Hash,
}

impl BlockHeader {
    /// Fixed-width header encoding.
    pub fn encode(&self) -> [u8; HEADER_ENCODED_LEN] {
        let mut out = [0u8; HEADER_ENCODED_LEN];
        out[..32].copy_from_slice(&self.parent_hash);
        out[32..40].copy_from_slice(&self.timestamp.to_be_bytes());
        out[40..48].copy_from_slice(&self.block_number.to_be_bytes());
        out[48..].copy_from_slice(&self.state_root);
        out
    }

    /// Block hash. Covers the header only.
    pub fn hash(&self) -> Hash {
        keccak256(&self.encode())
    }
}

/// A block: header plus the ordered transactions it applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<SignedTransaction>,
}

impl Block {
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    pub fn number(&self) -> u64 {
        self.header.block_number
    }

    pub fn is_genesis(&self) -> bool {
        self.header.block_number == 0
    }
}
