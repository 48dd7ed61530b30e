//! # Ledger-Chain Benchmarks
//!
//! | Subsystem | Operation |
//! |-----------|-----------|
//! | lc-01 Signature Recovery | single recovery, rayon batch recovery |
//! | lc-02 State Management | full Merkle rebuild by account count |
//! | lc-05 State Transition | apply one transfer (one block) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lc_01_signature_recovery::{TransactionVerifier, Wallet};
use lc_02_state_management::{LedgerState, MerkleCommitment};
use lc_03_block_production::ManualTimeSource;
use lc_05_state_transition::StateTransitionService;
use shared_types::{SignedTransaction, UnsignedTransaction, U256};
use std::time::Duration;

fn signed(wallet: &Wallet, nonce: u64) -> SignedTransaction {
    wallet
        .sign_transaction(
            UnsignedTransaction {
                nonce,
                gas_price: U256::one(),
                gas_limit: U256::from(21_000u64),
                to: [0x42; 20],
                value: U256::one(),
                data: vec![],
            },
            None,
        )
        .unwrap()
}

// ============================================================================
// LC-01: Signature Recovery
// ============================================================================

fn bench_signer_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-01-signature-recovery");
    group.measurement_time(Duration::from_secs(10));

    let verifier = TransactionVerifier::new();
    let wallet = Wallet::random();
    let tx = signed(&wallet, 0);

    group.bench_function("recover_single", |b| {
        b.iter(|| black_box(verifier.recover(black_box(&tx)).is_ok()))
    });

    for size in [10usize, 100, 500] {
        let txs: Vec<_> = (0..size as u64).map(|n| signed(&wallet, n)).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("recover_batch", size), &txs, |b, txs| {
            b.iter(|| black_box(verifier.recover_batch(txs).len()))
        });
    }

    group.finish();
}

// ============================================================================
// LC-02: Merkle Commitment
// ============================================================================

fn bench_merkle_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-02-merkle-commitment");

    for accounts in [100u64, 1_000, 10_000] {
        let mut ledger = LedgerState::new();
        for i in 0..accounts {
            let mut address = [0u8; 20];
            address[12..].copy_from_slice(&i.to_be_bytes());
            ledger.credit(address, U256::from(i + 1)).unwrap();
        }
        let snapshot = ledger.snapshot();

        group.throughput(Throughput::Elements(accounts));
        group.bench_with_input(
            BenchmarkId::new("rebuild", accounts),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    let mut commitment = MerkleCommitment::new();
                    black_box(commitment.rebuild(snapshot))
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// LC-05: State Transition
// ============================================================================

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("lc-05-state-transition");

    group.bench_function("apply_transfer", |b| {
        let wallet = Wallet::random();
        let ledger = StateTransitionService::new(TransactionVerifier::new(), ManualTimeSource::new(0));
        ledger
            .initialize_genesis(&[(wallet.address(), U256::MAX)], false)
            .unwrap();
        let mut nonce = 0u64;
        b.iter_batched(
            || {
                let tx = signed(&wallet, nonce);
                nonce += 1;
                tx
            },
            |tx| black_box(ledger.apply(tx).is_ok()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_signer_recovery, bench_merkle_rebuild, bench_apply);
criterion_main!(benches);
