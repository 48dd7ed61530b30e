//! # Merkle Commitment
//!
//! A binary Merkle root over the full ledger, rebuilt from scratch on every
//! mutation. Nothing but the root is retained.
//!
//! ## Algorithm
//!
//! 1. Sort leaves by key (`tag ‖ address`), never by insertion order
//! 2. Hash each leaf as `keccak256(key ‖ value)`
//! 3. Pad to a power of two (minimum 2) with `SENTINEL_HASH`
//! 4. Build bottom-up: each parent = `keccak256(left ‖ right)`
//!
//! Zero leaves yield [`EMPTY_COMMITMENT_ROOT`].

use super::entities::{LedgerSnapshot, MerkleLeaf, EMPTY_COMMITMENT_ROOT, SENTINEL_HASH};
use super::errors::CommitmentError;
use shared_types::{keccak256, Hash};
use tracing::debug;

/// The most recently computed state root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MerkleCommitment {
    root: Option<Hash>,
    leaf_count: usize,
}

impl MerkleCommitment {
    /// An uninitialized commitment. [`MerkleCommitment::root`] fails until
    /// the first rebuild.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the root over `snapshot` and stores it.
    pub fn rebuild(&mut self, snapshot: &LedgerSnapshot) -> Hash {
        let leaves = snapshot.leaves();
        self.leaf_count = leaves.len();
        let root = compute_root(leaves);
        self.root = Some(root);
        debug!(
            leaf_count = self.leaf_count,
            root = %shared_types::format_hash(&root),
            "Rebuilt state commitment"
        );
        root
    }

    pub fn root(&self) -> Result<Hash, CommitmentError> {
        self.root.ok_or(CommitmentError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.root.is_some()
    }

    /// Leaves committed by the last rebuild (before padding).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }
}

/// Root over an arbitrary leaf set. Input order does not matter.
///
/// Keys are expected to be unique.
pub fn compute_root(mut leaves: Vec<MerkleLeaf>) -> Hash {
    if leaves.is_empty() {
        return EMPTY_COMMITMENT_ROOT;
    }
    leaves.sort_by(|a, b| a.key.cmp(&b.key));

    let padded_leaf_count = leaves.len().next_power_of_two().max(2);

    // Complete binary tree in array form: parent i has children 2i+1, 2i+2.
    let leaf_start = padded_leaf_count - 1;
    let mut nodes = vec![SENTINEL_HASH; 2 * padded_leaf_count - 1];
    for (i, leaf) in leaves.iter().enumerate() {
        nodes[leaf_start + i] = leaf.hash();
    }
    for i in (0..leaf_start).rev() {
        nodes[i] = hash_pair(&nodes[2 * i + 1], &nodes[2 * i + 2]);
    }

    nodes[0]
}

fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    keccak256(&buf)
}
