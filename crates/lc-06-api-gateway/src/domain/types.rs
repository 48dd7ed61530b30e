//! JSON-RPC envelope and response types.

use super::error::ApiError;
use lc_04_block_storage::TransactionLocation;
use serde::{Deserialize, Serialize};
use shared_types::{format_address, to_hex_bytes, to_hex_quantity, u64_to_hex_quantity};

/// JSON-RPC request ID type
///
/// Per JSON-RPC 2.0, an ID can be a string or a number. A missing or null
/// ID is carried as `None`. Numbers are kept as parsed, so fractional and
/// out-of-range ids echo back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcId {
    String(String),
    Number(serde_json::Number),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<JsonRpcId>,
    pub method: String,
    #[serde(default)]
    pub params: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<JsonRpcId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<JsonRpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<JsonRpcId>, error: ApiError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Location and fields of an applied transaction. Every integer is a hex
/// quantity (`"0x0"` for zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub block_number: String,
    pub transaction_index: String,
    pub nonce: String,
    pub gas_price: String,
    pub gas_limit: String,
    pub to: String,
    pub value: String,
    pub data: String,
    pub v: String,
    pub r: String,
    pub s: String,
}

impl From<&TransactionLocation> for TransactionReceipt {
    fn from(location: &TransactionLocation) -> Self {
        let tx = &location.transaction;
        Self {
            block_number: u64_to_hex_quantity(location.block_number),
            transaction_index: u64_to_hex_quantity(location.tx_index as u64),
            nonce: u64_to_hex_quantity(tx.nonce),
            gas_price: to_hex_quantity(tx.gas_price),
            gas_limit: to_hex_quantity(tx.gas_limit),
            to: format_address(&tx.to),
            value: to_hex_quantity(tx.value),
            data: to_hex_bytes(&tx.data),
            v: to_hex_quantity(tx.v),
            r: to_hex_quantity(tx.r),
            s: to_hex_quantity(tx.s),
        }
    }
}
