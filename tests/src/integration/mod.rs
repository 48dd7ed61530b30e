//! Integration tests across subsystem boundaries.

mod flows;
mod rpc;

#[cfg(test)]
pub(crate) mod fixtures {
    use lc_01_signature_recovery::{TransactionVerifier, Wallet};
    use lc_03_block_production::ManualTimeSource;
    use lc_05_state_transition::StateTransitionService;
    use shared_types::{Address, SignedTransaction, UnsignedTransaction, U256};

    pub type Ledger = StateTransitionService<TransactionVerifier, ManualTimeSource>;

    pub const START_TIME: u64 = 1_700_000_000;

    pub fn eth(units: u64) -> U256 {
        U256::exp10(18) * U256::from(units)
    }

    pub fn ledger_with(allocations: &[(Address, U256)]) -> Ledger {
        let ledger =
            StateTransitionService::new(TransactionVerifier::new(), ManualTimeSource::new(START_TIME));
        ledger.initialize_genesis(allocations, false).unwrap();
        ledger
    }

    pub fn transfer(wallet: &Wallet, nonce: u64, to: Address, value: U256) -> SignedTransaction {
        wallet
            .sign_transaction(
                UnsignedTransaction {
                    nonce,
                    gas_price: U256::from(20_000_000_000u64),
                    gas_limit: U256::from(21_000u64),
                    to,
                    value,
                    data: vec![],
                },
                None,
            )
            .unwrap()
    }
}
