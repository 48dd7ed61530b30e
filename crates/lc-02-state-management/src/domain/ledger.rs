//! # Ledger State
//!
//! Balances and nonces for every account, keyed by address in a `BTreeMap`
//! so iteration order is always ascending by address.

use super::entities::{AccountState, LedgerSnapshot, TransferJournal};
use super::errors::StateError;
use shared_types::{Address, U256};
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerState {
    accounts: BTreeMap<Address, AccountState>,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, address: &Address) -> AccountState {
        self.accounts.get(address).copied().unwrap_or_default()
    }

    pub fn get_balance(&self, address: &Address) -> U256 {
        self.account(address).balance
    }

    pub fn get_nonce(&self, address: &Address) -> u64 {
        self.account(address).nonce
    }

    /// Number of accounts with an entry (including zeroed ones).
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Moves `amount` from `from` to `to` and bumps `from`'s nonce.
    ///
    /// The nonce is checked before the balance. Every check runs before the
    /// first write, so an error leaves the ledger untouched. A self-transfer
    /// only bumps the nonce. The returned journal undoes the transfer via
    /// [`LedgerState::revert`].
    pub fn apply_transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
        expected_nonce: u64,
    ) -> Result<TransferJournal, StateError> {
        let sender = self.account(&from);

        if sender.nonce != expected_nonce {
            return Err(StateError::InvalidNonce {
                expected: sender.nonce,
                actual: expected_nonce,
            });
        }
        if sender.balance < amount {
            return Err(StateError::InsufficientBalance {
                required: amount,
                available: sender.balance,
            });
        }
        let next_nonce = sender
            .nonce
            .checked_add(1)
            .ok_or(StateError::NonceOverflow { address: from })?;

        let journal = TransferJournal {
            sender: (from, self.accounts.get(&from).copied()),
            recipient: (from != to).then(|| (to, self.accounts.get(&to).copied())),
        };

        if from == to {
            self.accounts.insert(
                from,
                AccountState {
                    balance: sender.balance,
                    nonce: next_nonce,
                },
            );
        } else {
            let recipient = self.account(&to);
            let credited = recipient
                .balance
                .checked_add(amount)
                .ok_or(StateError::BalanceOverflow { address: to })?;

            self.accounts.insert(
                from,
                AccountState {
                    balance: sender.balance - amount,
                    nonce: next_nonce,
                },
            );
            self.accounts.insert(
                to,
                AccountState {
                    balance: credited,
                    nonce: recipient.nonce,
                },
            );
        }

        trace!(nonce = expected_nonce, %amount, "Applied transfer");
        Ok(journal)
    }

    /// Restores the accounts touched by a transfer to their prior state.
    ///
    /// Must be applied to the most recent transfer only.
    pub fn revert(&mut self, journal: TransferJournal) {
        if let Some((address, prior)) = journal.recipient {
            self.restore(address, prior);
        }
        let (address, prior) = journal.sender;
        self.restore(address, prior);
    }

    fn restore(&mut self, address: Address, prior: Option<AccountState>) {
        match prior {
            Some(state) => {
                self.accounts.insert(address, state);
            }
            None => {
                self.accounts.remove(&address);
            }
        }
    }

    /// Adds `amount` to `address`. Used for genesis allocations only.
    pub fn credit(&mut self, address: Address, amount: U256) -> Result<(), StateError> {
        let mut state = self.account(&address);
        state.balance = state
            .balance
            .checked_add(amount)
            .ok_or(StateError::BalanceOverflow { address })?;
        self.accounts.insert(address, state);
        Ok(())
    }

    /// Copies every account, for commitment rebuilds.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            accounts: self.accounts.clone(),
        }
    }
}
