//! # ECDSA Recovery (secp256k1)
//!
//! Pure functions: `v` normalization, compact signature assembly, public-key
//! recovery against a prehashed digest and address derivation.
//!
//! ## Recovery Indicator
//!
//! | `v` | Recovery id |
//! |-----|-------------|
//! | 0, 1 | `v` |
//! | 27, 28 | `v - 27` |
//! | >= 35 | `v - (35 + 2 * chain_id)` |
//!
//! Anything else, or a result outside {0, 1}, is rejected.

use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use shared_types::{keccak256, Address, Hash, U256};

/// Half of the secp256k1 curve order, rounded down.
///
/// n/2 where n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
pub const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Base added to the recovery id for EIP-155 style `v` values.
pub const EIP155_V_BASE: u64 = 35;

/// Base added to the recovery id for legacy `v` values.
pub const LEGACY_V_BASE: u64 = 27;

// =============================================================================
// RECOVERY INDICATOR
// =============================================================================

/// Normalizes a raw `v` into a recovery id in {0, 1}.
///
/// With `chain_id = Some(id)`, a `v >= 35` must equal `35 + 2 * id + {0, 1}`.
/// With `None`, any `v >= 35` is reduced with `(v - 35) mod 2`.
pub fn normalize_v(v: U256, chain_id: Option<u64>) -> Result<u8, SignatureError> {
    if v.bits() > 64 {
        return Err(SignatureError::InvalidRecoveryId(v.to_string()));
    }
    let raw = v.low_u64();

    let id = match raw {
        0 | 1 => raw,
        27 | 28 => raw - LEGACY_V_BASE,
        _ if raw >= EIP155_V_BASE => match chain_id {
            Some(expected) => {
                let base = expected
                    .checked_mul(2)
                    .and_then(|x| x.checked_add(EIP155_V_BASE))
                    .ok_or_else(|| SignatureError::InvalidRecoveryId(v.to_string()))?;
                match raw.checked_sub(base) {
                    Some(id @ (0 | 1)) => id,
                    _ => {
                        return Err(SignatureError::ChainIdMismatch {
                            expected,
                            v: raw.to_string(),
                        })
                    }
                }
            }
            None => (raw - EIP155_V_BASE) % 2,
        },
        _ => return Err(SignatureError::InvalidRecoveryId(raw.to_string())),
    };

    Ok(id as u8)
}

/// Encodes a recovery id as `v`: `27 + id`, or `35 + 2 * chain_id + id`.
pub fn encode_v(recovery_id: u8, chain_id: Option<u64>) -> U256 {
    let id = u64::from(recovery_id & 1);
    match chain_id {
        Some(chain) => {
            U256::from(chain) * U256::from(2u64) + U256::from(EIP155_V_BASE + id)
        }
        None => U256::from(LEGACY_V_BASE + id),
    }
}

// =============================================================================
// RECOVERY
// =============================================================================

/// Returns true if `s` lies in the lower half of the curve order.
pub fn is_low_s(s: U256) -> bool {
    s <= U256::from_big_endian(&SECP256K1_HALF_ORDER)
}

/// Recovers the signer address of `digest` from `(recovery_id, r, s)`.
///
/// The 65-byte compact form is `r ‖ s ‖ recovery_id`.
pub fn recover_signer(
    digest: &Hash,
    recovery_id: u8,
    r: U256,
    s: U256,
) -> Result<Address, SignatureError> {
    if r.is_zero() || s.is_zero() {
        return Err(SignatureError::InvalidFormat);
    }
    if !is_low_s(s) {
        return Err(SignatureError::MalleableSignature);
    }

    let mut compact = [0u8; 65];
    r.to_big_endian(&mut compact[..32]);
    s.to_big_endian(&mut compact[32..64]);
    compact[64] = recovery_id;

    let sig = Signature::from_slice(&compact[..64]).map_err(|_| SignatureError::InvalidFormat)?;
    let recid = RecoveryId::try_from(compact[64])
        .map_err(|_| SignatureError::InvalidRecoveryId(recovery_id.to_string()))?;

    let key = VerifyingKey::recover_from_prehash(digest, &sig, recid)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&key))
}

/// Derives an address: last 20 bytes of `keccak256(pubkey)`, where `pubkey`
/// is the uncompressed point without its 0x04 prefix.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}
