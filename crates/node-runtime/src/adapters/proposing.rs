use lc_03_block_production::ProposerSelector;
use lc_06_api_gateway::{ApiError, TransactionSubmitter};
use parking_lot::Mutex;
use shared_types::{format_address, Address, Hash, SignedTransaction};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Consults the stake-weighted proposer lottery before forwarding each
/// transaction. The chosen proposer is logged only; any node may still
/// produce the block.
#[derive(Clone)]
pub struct ProposingSubmitter<Q: TransactionSubmitter> {
    inner: Q,
    selector: Arc<Mutex<ProposerSelector>>,
    stakes: Arc<Vec<(Address, u64)>>,
}

impl<Q: TransactionSubmitter> ProposingSubmitter<Q> {
    pub fn new(inner: Q, selector: ProposerSelector, stakes: Vec<(Address, u64)>) -> Self {
        Self {
            inner,
            selector: Arc::new(Mutex::new(selector)),
            stakes: Arc::new(stakes),
        }
    }

    /// Draw the proposer for the next block.
    pub fn select_proposer(&self) -> Address {
        self.selector
            .lock()
            .select_proposer(self.stakes.iter().map(|(address, stake)| (address, stake)))
    }
}

impl<Q: TransactionSubmitter> TransactionSubmitter for ProposingSubmitter<Q> {
    fn submit(
        &self,
        tx: SignedTransaction,
    ) -> impl Future<Output = Result<Hash, ApiError>> + Send {
        let proposer = self.select_proposer();
        info!(proposer = %format_address(&proposer), nonce = tx.nonce, "Proposer selected");
        self.inner.submit(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_03_block_production::DEFAULT_PROPOSER;
    use shared_types::{UnsignedTransaction, U256};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct CountingSubmitter {
        calls: Arc<AtomicUsize>,
    }

    impl TransactionSubmitter for CountingSubmitter {
        fn submit(
            &self,
            tx: SignedTransaction,
        ) -> impl Future<Output = Result<Hash, ApiError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(tx.hash()) }
        }
    }

    fn unsigned_tx() -> SignedTransaction {
        UnsignedTransaction {
            nonce: 0,
            gas_price: U256::zero(),
            gas_limit: U256::zero(),
            to: [1; 20],
            value: U256::one(),
            data: vec![],
        }
        .into_signed(U256::from(27u64), U256::one(), U256::one())
    }

    #[tokio::test]
    async fn test_forwards_to_inner_submitter() {
        let inner = CountingSubmitter::default();
        let submitter =
            ProposingSubmitter::new(inner.clone(), ProposerSelector::with_seed(7), vec![([5; 20], 1)]);

        let tx = unsigned_tx();
        assert_eq!(submitter.submit(tx.clone()).await.unwrap(), tx.hash());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_single_staker_always_selected() {
        let submitter = ProposingSubmitter::new(
            CountingSubmitter::default(),
            ProposerSelector::with_seed(1),
            vec![([5; 20], 10)],
        );
        for _ in 0..20 {
            assert_eq!(submitter.select_proposer(), [5; 20]);
        }
    }

    #[test]
    fn test_zero_stake_falls_back_to_default() {
        let submitter = ProposingSubmitter::new(
            CountingSubmitter::default(),
            ProposerSelector::with_seed(1),
            vec![([5; 20], 0)],
        );
        assert_eq!(submitter.select_proposer(), DEFAULT_PROPOSER);
    }
}
