//! # Integration Test Flows
//!
//! Signed transactions through signer recovery, the ledger, the Merkle
//! commitment, block assembly and the chain, checked from the outside via
//! the state transition API.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{eth, ledger_with, transfer, Ledger};
    use lc_01_signature_recovery::{TransactionVerifier, Wallet};
    use lc_02_state_management::{compute_root, LedgerState, MerkleCommitment};
    use lc_03_block_production::{ProposerSelector, DEFAULT_PROPOSER};
    use lc_04_block_storage::ChainError;
    use lc_05_state_transition::{ErrorKind, TransitionError};
    use shared_types::{keccak256, Address, U256, GENESIS_PARENT_HASH};
    use std::collections::HashMap;

    const RECIPIENT: Address = [0x52; 20];

    fn assert_unchanged(ledger: &Ledger, sender: &Address, balance: U256, nonce: u64, blocks: usize) {
        assert_eq!(ledger.get_balance(sender), balance);
        assert_eq!(ledger.get_nonce(sender), nonce);
        assert_eq!(ledger.chain_len(), blocks);
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    #[test]
    fn test_transfer_scenario_then_replay() {
        let sender = Wallet::random();
        let ledger = ledger_with(&[(sender.address(), eth(9))]);

        let tx = transfer(&sender, 0, RECIPIENT, eth(1));
        let tx_hash = ledger.apply(tx.clone()).unwrap();
        assert_eq!(tx_hash, tx.hash());

        assert_eq!(ledger.get_balance(&sender.address()), eth(8));
        assert_eq!(ledger.get_balance(&RECIPIENT), eth(1));
        assert_eq!(ledger.get_nonce(&sender.address()), 1);
        assert_eq!(ledger.chain_len(), 1);

        let block = ledger.block(0).unwrap();
        assert_eq!(block.header.parent_hash, GENESIS_PARENT_HASH);
        assert_eq!(block.transactions, vec![tx.clone()]);
        assert_eq!(block.header.state_root, ledger.state_root().unwrap());

        let replay = ledger.apply(tx).unwrap_err();
        assert_eq!(replay.kind(), ErrorKind::InvalidNonce);
        assert!(!replay.is_retryable());
        assert_unchanged(&ledger, &sender.address(), eth(8), 1, 1);
        assert_eq!(ledger.get_balance(&RECIPIENT), eth(1));
    }

    #[test]
    fn test_insufficient_balance_then_funded_retry() {
        let sender = Wallet::random();
        let funder = Wallet::random();
        let ledger = ledger_with(&[(sender.address(), eth(1)), (funder.address(), eth(5))]);
        let root_before = ledger.state_root().unwrap();

        let too_much = transfer(&sender, 0, RECIPIENT, eth(2));
        let error = ledger.apply(too_much.clone()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InsufficientBalance);
        assert!(error.is_retryable());
        assert_unchanged(&ledger, &sender.address(), eth(1), 0, 0);
        assert_eq!(ledger.state_root().unwrap(), root_before);

        ledger
            .apply(transfer(&funder, 0, sender.address(), eth(2)))
            .unwrap();
        ledger.apply(too_much).unwrap();
        assert_eq!(ledger.get_balance(&sender.address()), eth(1));
        assert_eq!(ledger.get_balance(&RECIPIENT), eth(2));
    }

    #[test]
    fn test_future_nonce_rejected() {
        let sender = Wallet::random();
        let ledger = ledger_with(&[(sender.address(), eth(1))]);

        let error = ledger
            .apply(transfer(&sender, 1, RECIPIENT, U256::one()))
            .unwrap_err();
        assert!(matches!(
            error,
            TransitionError::State(lc_02_state_management::StateError::InvalidNonce {
                expected: 0,
                actual: 1
            })
        ));
        assert_unchanged(&ledger, &sender.address(), eth(1), 0, 0);
    }

    #[test]
    fn test_tampered_signature_does_not_move_funds() {
        let sender = Wallet::random();
        let ledger = ledger_with(&[(sender.address(), eth(3))]);

        // Changing the value changes the digest, so a different key recovers.
        let mut tx = transfer(&sender, 0, RECIPIENT, eth(1));
        tx.value = eth(2);
        let error = ledger.apply(tx).unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::InvalidSignature | ErrorKind::InsufficientBalance
        ));

        assert_unchanged(&ledger, &sender.address(), eth(3), 0, 0);
        assert_eq!(ledger.get_balance(&RECIPIENT), U256::zero());
    }

    // =========================================================================
    // CHAIN QUERIES
    // =========================================================================

    #[test]
    fn test_find_transaction_across_chain_lengths() {
        let sender = Wallet::random();
        let ledger = ledger_with(&[(sender.address(), eth(10))]);
        let missing = keccak256(b"absent");

        // Length 0
        assert!(matches!(
            ledger.find_transaction(&missing),
            Err(TransitionError::Chain(ChainError::TransactionNotFound { .. }))
        ));

        // Length 1
        let first = transfer(&sender, 0, RECIPIENT, eth(1));
        ledger.apply(first.clone()).unwrap();
        let location = ledger.find_transaction(&first.hash()).unwrap();
        assert_eq!((location.block_index, location.tx_index), (0, 0));
        assert_eq!(ledger.find_transaction(&missing).unwrap_err().kind(), ErrorKind::NotFound);

        // Length N
        let mut hashes = vec![first.hash()];
        for nonce in 1..6 {
            let tx = transfer(&sender, nonce, RECIPIENT, eth(1));
            hashes.push(ledger.apply(tx).unwrap());
        }
        for (index, hash) in hashes.iter().enumerate() {
            let location = ledger.find_transaction(hash).unwrap();
            assert_eq!(location.block_index, index);
            assert_eq!(location.block_number, index as u64);
            assert_eq!(location.tx_index, 0);
            assert_eq!(location.transaction.hash(), *hash);
        }
        assert!(ledger.find_transaction(&missing).is_err());
    }

    #[test]
    fn test_chain_links_every_block_to_its_parent() {
        let sender = Wallet::random();
        let ledger = ledger_with(&[(sender.address(), eth(10))]);
        for nonce in 0..4 {
            ledger
                .apply(transfer(&sender, nonce, RECIPIENT, U256::one()))
                .unwrap();
        }

        let mut parent = GENESIS_PARENT_HASH;
        for number in 0..4 {
            let block = ledger.block(number).unwrap();
            assert_eq!(block.header.block_number, number);
            assert_eq!(block.header.parent_hash, parent);
            assert_eq!(block.transactions.len(), 1);
            parent = block.hash();
        }
        assert_eq!(ledger.latest_block_number().unwrap(), 3);
    }

    #[test]
    fn test_apply_batch_recovers_in_parallel_and_applies_in_order() {
        let wallets: Vec<Wallet> = (0..6).map(|_| Wallet::random()).collect();
        let allocations: Vec<_> = wallets.iter().map(|w| (w.address(), eth(1))).collect();
        let ledger = ledger_with(&allocations);

        let mut txs: Vec<_> = wallets
            .iter()
            .map(|w| transfer(w, 0, RECIPIENT, U256::from(10u64)))
            .collect();
        // Second spend by the first wallet with a stale nonce.
        txs.push(transfer(&wallets[0], 0, RECIPIENT, U256::from(10u64)));

        let results = ledger.apply_batch(txs.clone());
        assert_eq!(results.len(), 7);
        for (result, tx) in results.iter().zip(&txs).take(6) {
            assert_eq!(result.as_ref().unwrap(), &tx.hash());
        }
        assert_eq!(results[6].as_ref().unwrap_err().kind(), ErrorKind::InvalidNonce);
        assert_eq!(ledger.chain_len(), 6);
        assert_eq!(ledger.get_balance(&RECIPIENT), U256::from(60u64));
    }

    // =========================================================================
    // COMMITMENT
    // =========================================================================

    #[test]
    fn test_committed_root_matches_independent_rebuild() {
        let a = Wallet::random();
        let b = Wallet::random();
        let ledger = ledger_with(&[(a.address(), eth(4)), (b.address(), eth(4))]);
        ledger.apply(transfer(&a, 0, b.address(), eth(1))).unwrap();
        ledger.apply(transfer(&b, 0, RECIPIENT, eth(2))).unwrap();

        // Same final state reached through credits in a different order.
        let mut mirror = LedgerState::new();
        mirror.credit(RECIPIENT, eth(2)).unwrap();
        mirror.credit(b.address(), eth(3)).unwrap();
        mirror.credit(a.address(), eth(3)).unwrap();
        mirror.apply_transfer(a.address(), RECIPIENT, U256::zero(), 0).unwrap();
        mirror.apply_transfer(b.address(), RECIPIENT, U256::zero(), 0).unwrap();

        let mut commitment = MerkleCommitment::new();
        let root = commitment.rebuild(&mirror.snapshot());
        assert_eq!(root, ledger.state_root().unwrap());
        assert_eq!(root, compute_root(mirror.snapshot().leaves()));
    }

    // =========================================================================
    // PROPOSER SELECTION
    // =========================================================================

    #[test]
    fn test_zero_stakes_always_yield_default_proposer() {
        let stakes: HashMap<Address, u64> = [([1; 20], 0), ([2; 20], 0), ([3; 20], 0)]
            .into_iter()
            .collect();
        let mut selector = ProposerSelector::new();
        for _ in 0..50 {
            assert_eq!(selector.select_proposer(&stakes), DEFAULT_PROPOSER);
        }
    }

    #[test]
    fn test_recover_matches_wallet_address() {
        let verifier = TransactionVerifier::with_chain_id(1337);
        for _ in 0..10 {
            let wallet = Wallet::random();
            let tx = wallet
                .sign_transaction(
                    shared_types::UnsignedTransaction {
                        nonce: 3,
                        gas_price: U256::one(),
                        gas_limit: U256::one(),
                        to: RECIPIENT,
                        value: eth(1),
                        data: vec![0xde, 0xad],
                    },
                    Some(1337),
                )
                .unwrap();
            assert_eq!(verifier.recover(&tx).unwrap(), wallet.address());
        }
    }
}
