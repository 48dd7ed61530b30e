//! # Raw Transaction Codec
//!
//! Legacy transactions as a 9-item RLP list:
//!
//! ```text
//! [nonce, gasPrice, gasLimit, to, value, data, v, r, s]
//! ```
//!
//! `to` must be exactly 20 bytes; contract creation (empty `to`) is not
//! supported. Integers are big-endian with no fixed width. The list must
//! span the whole input; trailing bytes are rejected.

use super::error::ApiError;
use rlp::{DecoderError, Rlp, RlpStream};
use shared_types::{Address, SignedTransaction, U256};

const LEGACY_FIELD_COUNT: usize = 9;

/// Maximum raw transaction size (128 KB).
pub const MAX_RAW_TX_SIZE: usize = 128 * 1024;

/// Decodes a raw legacy transaction (already hex-decoded).
pub fn decode_raw_transaction(data: &[u8]) -> Result<SignedTransaction, ApiError> {
    if data.len() > MAX_RAW_TX_SIZE {
        return Err(ApiError::invalid_params(format!(
            "Transaction size {} exceeds limit {}",
            data.len(),
            MAX_RAW_TX_SIZE
        )));
    }

    let rlp = Rlp::new(data);

    if !rlp.is_list() {
        return Err(ApiError::invalid_params("Transaction must be RLP list"));
    }

    let payload = rlp.payload_info().map_err(|e| rlp_error("list header", e))?;
    if payload.total() != data.len() {
        return Err(ApiError::invalid_params(format!(
            "Transaction list covers {} of {} bytes",
            payload.total(),
            data.len()
        )));
    }

    let item_count = rlp.item_count().map_err(|e| rlp_error("item count", e))?;
    if item_count != LEGACY_FIELD_COUNT {
        return Err(ApiError::invalid_params(format!(
            "Legacy transaction must have {} fields, got {}",
            LEGACY_FIELD_COUNT, item_count
        )));
    }

    Ok(SignedTransaction {
        nonce: decode_u64(&rlp, 0)?,
        gas_price: decode_u256(&rlp, 1)?,
        gas_limit: decode_u256(&rlp, 2)?,
        to: decode_address(&rlp, 3)?,
        value: decode_u256(&rlp, 4)?,
        data: decode_bytes(&rlp, 5)?,
        v: decode_u256(&rlp, 6)?,
        r: decode_u256(&rlp, 7)?,
        s: decode_u256(&rlp, 8)?,
    })
}

/// Encodes a signed transaction in the same layout `decode_raw_transaction`
/// accepts.
pub fn encode_raw_transaction(tx: &SignedTransaction) -> Vec<u8> {
    let mut stream = RlpStream::new_list(LEGACY_FIELD_COUNT);
    stream.append(&tx.nonce);
    stream.append(&u256_bytes(tx.gas_price));
    stream.append(&u256_bytes(tx.gas_limit));
    stream.append(&tx.to.to_vec());
    stream.append(&u256_bytes(tx.value));
    stream.append(&tx.data);
    stream.append(&u256_bytes(tx.v));
    stream.append(&u256_bytes(tx.r));
    stream.append(&u256_bytes(tx.s));
    stream.out().to_vec()
}

/// Minimal big-endian bytes. Zero encodes as empty.
fn u256_bytes(value: U256) -> Vec<u8> {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    let first = buf.iter().position(|b| *b != 0).unwrap_or(buf.len());
    buf[first..].to_vec()
}

// Helper functions for RLP decoding

fn decode_u64(rlp: &Rlp, index: usize) -> Result<u64, ApiError> {
    rlp.at(index)
        .and_then(|r| r.as_val())
        .map_err(|e| rlp_error(&format!("field {}", index), e))
}

fn decode_u256(rlp: &Rlp, index: usize) -> Result<U256, ApiError> {
    let bytes = decode_bytes(rlp, index)?;
    if bytes.len() > 32 {
        return Err(ApiError::invalid_params(format!(
            "U256 field {} too large: {} bytes",
            index,
            bytes.len()
        )));
    }
    Ok(U256::from_big_endian(&bytes))
}

fn decode_bytes(rlp: &Rlp, index: usize) -> Result<Vec<u8>, ApiError> {
    rlp.at(index)
        .and_then(|r| r.as_val::<Vec<u8>>())
        .map_err(|e| rlp_error(&format!("field {}", index), e))
}

fn decode_address(rlp: &Rlp, index: usize) -> Result<Address, ApiError> {
    let bytes = decode_bytes(rlp, index)?;
    if bytes.is_empty() {
        return Err(ApiError::invalid_params(
            "Contract creation transactions are not supported",
        ));
    }
    let address: Address = bytes.as_slice().try_into().map_err(|_| {
        ApiError::invalid_params(format!(
            "Invalid address length at field {}: {} bytes",
            index,
            bytes.len()
        ))
    })?;
    Ok(address)
}

fn rlp_error(field: &str, e: DecoderError) -> ApiError {
    ApiError::invalid_params(format!("RLP decode error for {}: {:?}", field, e))
}
