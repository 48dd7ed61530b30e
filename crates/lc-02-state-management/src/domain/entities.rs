//! # Ledger Entities
//!
//! Account state, snapshots and the leaf tags of the state commitment.

use shared_types::{keccak256, Address, Hash, U256};
use std::collections::BTreeMap;

/// Root of a commitment over zero leaves: `keccak256("")`.
pub const EMPTY_COMMITMENT_ROOT: Hash = [
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
];

/// Padding leaf used to fill the tree to a power of two.
pub const SENTINEL_HASH: Hash = [0u8; 32];

/// Leaf key tag for balances.
pub const BALANCE_TAG: u8 = 0x00;

/// Leaf key tag for nonces.
pub const NONCE_TAG: u8 = 0x01;

/// Per-account state. Unseen accounts read as the default (zero, zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountState {
    pub balance: U256,
    pub nonce: u64,
}

impl AccountState {
    pub fn new(balance: U256) -> Self {
        Self { balance, nonce: 0 }
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }
}

/// A point-in-time copy of every account, ordered by address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub accounts: BTreeMap<Address, AccountState>,
}

impl LedgerSnapshot {
    /// One leaf per non-zero balance and per non-zero nonce.
    ///
    /// Zero values produce no leaf, so an untouched account and an account
    /// drained to zero commit identically.
    pub fn leaves(&self) -> Vec<MerkleLeaf> {
        let mut leaves = Vec::with_capacity(self.accounts.len() * 2);
        for (address, state) in &self.accounts {
            if !state.balance.is_zero() {
                let mut value = [0u8; 32];
                state.balance.to_big_endian(&mut value);
                leaves.push(MerkleLeaf::new(BALANCE_TAG, address, value.to_vec()));
            }
            if state.nonce != 0 {
                leaves.push(MerkleLeaf::new(
                    NONCE_TAG,
                    address,
                    state.nonce.to_be_bytes().to_vec(),
                ));
            }
        }
        leaves
    }
}

/// A `(key, value)` pair committed by the Merkle tree.
///
/// Key = `tag ‖ address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleLeaf {
    pub key: [u8; 21],
    pub value: Vec<u8>,
}

impl MerkleLeaf {
    pub fn new(tag: u8, address: &Address, value: Vec<u8>) -> Self {
        let mut key = [0u8; 21];
        key[0] = tag;
        key[1..].copy_from_slice(address);
        Self { key, value }
    }

    /// `keccak256(key ‖ value)`.
    pub fn hash(&self) -> Hash {
        let mut buf = Vec::with_capacity(self.key.len() + self.value.len());
        buf.extend_from_slice(&self.key);
        buf.extend_from_slice(&self.value);
        keccak256(&buf)
    }
}

/// Prior state of the accounts touched by one transfer.
///
/// `None` means the account had no entry before the transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferJournal {
    pub(crate) sender: (Address, Option<AccountState>),
    pub(crate) recipient: Option<(Address, Option<AccountState>)>,
}
