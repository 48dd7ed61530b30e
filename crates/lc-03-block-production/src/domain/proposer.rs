//! # Proposer Selection
//!
//! Stake-weighted draw over `address -> stake`. Candidates are walked in
//! ascending address order regardless of how the input map iterates, so a
//! seeded selector is reproducible across map types and insertion orders.
//!
//! The draw uses a plain PRNG. It carries no unpredictability or bias
//! guarantees and must not gate consensus safety.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{format_address, Address};
use tracing::debug;

/// Returned when the total stake is zero.
pub const DEFAULT_PROPOSER: Address = [0u8; 20];

#[derive(Debug, Clone)]
pub struct ProposerSelector {
    rng: StdRng,
}

impl Default for ProposerSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProposerSelector {
    /// A selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible selector.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a proposer with probability proportional to stake.
    ///
    /// Picks a uniform value in `[0, total)`, then returns the first address
    /// (ascending) whose cumulative stake exceeds it.
    #[tracing::instrument(skip_all)]
    pub fn select_proposer<'a, I>(&mut self, stakes: I) -> Address
    where
        I: IntoIterator<Item = (&'a Address, &'a u64)>,
    {
        let mut candidates: Vec<(Address, u64)> = stakes
            .into_iter()
            .filter(|(_, stake)| **stake > 0)
            .map(|(address, stake)| (*address, *stake))
            .collect();
        candidates.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let total: u128 = candidates.iter().map(|(_, stake)| u128::from(*stake)).sum();
        if total == 0 {
            debug!("No stake registered, using default proposer");
            return DEFAULT_PROPOSER;
        }

        let draw = self.rng.gen_range(0..total);
        let mut cumulative: u128 = 0;
        for (address, stake) in &candidates {
            cumulative += u128::from(*stake);
            if cumulative > draw {
                debug!(proposer = %format_address(address), "Selected proposer");
                return *address;
            }
        }

        // cumulative == total > draw after the last candidate
        DEFAULT_PROPOSER
    }
}
