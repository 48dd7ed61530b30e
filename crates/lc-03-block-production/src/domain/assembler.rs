//! # Block Assembler
//!
//! Builds the next block on top of an optional parent.
//!
//! | Field | Genesis | Otherwise |
//! |-------|---------|-----------|
//! | `parent_hash` | `GENESIS_PARENT_HASH` | `parent.hash()` |
//! | `block_number` | 0 | `parent.number() + 1` |
//! | `timestamp` | `TimeSource::now()` | `TimeSource::now()` |

use crate::ports::outbound::TimeSource;
use shared_types::{Block, BlockHeader, Hash, SignedTransaction, GENESIS_PARENT_HASH};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct BlockAssembler<T: TimeSource> {
    time_source: T,
}

impl<T: TimeSource> BlockAssembler<T> {
    pub fn new(time_source: T) -> Self {
        Self { time_source }
    }

    /// Produces a block referencing `parent` and committing to `state_root`.
    ///
    /// Block numbers saturate at `u64::MAX`.
    pub fn assemble(
        &self,
        parent: Option<&Block>,
        transactions: Vec<SignedTransaction>,
        state_root: Hash,
    ) -> Block {
        let (parent_hash, block_number) = match parent {
            Some(head) => (head.hash(), head.number().saturating_add(1)),
            None => (GENESIS_PARENT_HASH, 0),
        };

        let header = BlockHeader {
            parent_hash,
            timestamp: self.time_source.now(),
            block_number,
            state_root,
        };

        debug!(
            block_number,
            tx_count = transactions.len(),
            "Assembled block"
        );

        Block {
            header,
            transactions,
        }
    }
}
