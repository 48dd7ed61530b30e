use super::entities::TransactionLocation;
use super::errors::ChainError;
use shared_types::{format_hash, Block, Hash, GENESIS_PARENT_HASH};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `block` after checking it extends the current head.
    pub fn append(&mut self, block: Block) -> Result<(), ChainError> {
        let (expected_parent, expected_number) = match self.blocks.last() {
            Some(head) => (head.hash(), head.number().saturating_add(1)),
            None => (GENESIS_PARENT_HASH, 0),
        };

        if block.header.parent_hash != expected_parent {
            return Err(ChainError::BrokenParentLink {
                expected: expected_parent,
                actual: block.header.parent_hash,
            });
        }
        if block.header.block_number != expected_number {
            return Err(ChainError::UnexpectedBlockNumber {
                expected: expected_number,
                actual: block.header.block_number,
            });
        }

        debug!(
            block_number = expected_number,
            block_hash = %format_hash(&block.hash()),
            "Linkage verified, appending block"
        );
        self.blocks.push(block);
        Ok(())
    }

    pub fn head(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, number: u64) -> Result<&Block, ChainError> {
        usize::try_from(number)
            .ok()
            .and_then(|index| self.blocks.get(index))
            .ok_or(ChainError::BlockNotFound { number })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Scans every block, recomputing each transaction hash. The first match
    /// in chain order wins.
    pub fn find_transaction_by_hash(
        &self,
        tx_hash: &Hash,
    ) -> Result<TransactionLocation, ChainError> {
        for (block_index, block) in self.blocks.iter().enumerate() {
            for (tx_index, tx) in block.transactions.iter().enumerate() {
                if tx.hash() == *tx_hash {
                    return Ok(TransactionLocation {
                        block_index,
                        block_number: block.number(),
                        tx_index,
                        transaction: tx.clone(),
                    });
                }
            }
        }
        Err(ChainError::TransactionNotFound { tx_hash: *tx_hash })
    }
}
