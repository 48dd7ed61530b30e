//! # Wallet
//!
//! secp256k1 key generation and transaction signing. Signatures are always
//! emitted with low `s`.

use super::ecdsa::{address_from_pubkey, encode_v};
use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, SigningKey};
use shared_types::{Address, SignedTransaction, UnsignedTransaction, U256};
use std::fmt;

/// A private key and its derived address.
#[derive(Clone)]
pub struct Wallet {
    signing_key: SigningKey,
    address: Address,
}

impl Wallet {
    /// Generates a fresh key from the thread RNG.
    pub fn random() -> Self {
        Self::from_signing_key(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Loads a wallet from a 32-byte secret scalar.
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Result<Self, SignatureError> {
        let key = SigningKey::from_slice(secret)
            .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
        Ok(Self::from_signing_key(key))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = address_from_pubkey(signing_key.verifying_key());
        Self {
            signing_key,
            address,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs `tx` and encodes `v` as `27 + id`, or `35 + 2 * chain_id + id`.
    pub fn sign_transaction(
        &self,
        tx: UnsignedTransaction,
        chain_id: Option<u64>,
    ) -> Result<SignedTransaction, SignatureError> {
        let digest = tx.signing_hash();
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;

        // Negating s mirrors R across the x-axis.
        let (sig, recid) = match sig.normalize_s() {
            Some(low) => (
                low,
                RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced()),
            ),
            None => (sig, recid),
        };

        let bytes = sig.to_bytes();
        let r = U256::from_big_endian(&bytes[..32]);
        let s = U256::from_big_endian(&bytes[32..]);
        let v = encode_v(recid.to_byte(), chain_id);

        Ok(tx.into_signed(v, r, s))
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &shared_types::format_address(&self.address))
            .finish_non_exhaustive()
    }
}
