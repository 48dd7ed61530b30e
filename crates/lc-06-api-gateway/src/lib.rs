//! # API Gateway Subsystem (LC-06)
//!
//! The JSON-RPC 2.0 surface of the ledger. Transport framing is left to the
//! caller: this crate turns one request object into one response object.
//!
//! ## Methods
//!
//! | Method | Params | Result |
//! |--------|--------|--------|
//! | `ping` | none | `"pong"` |
//! | `eth_getTransactionCount` | address, `"latest"` | hex nonce |
//! | `eth_getBalance` | address, `"latest"` | hex balance |
//! | `eth_blockNumber` | none | hex head number |
//! | `eth_sendRawTransaction` | hex RLP | tx hash |
//! | `eth_getTransactionReceipt` | tx hash | receipt object |
//! | `eth_getTransactionByHash` | tx hash | receipt object |
//!
//! Every failure becomes a JSON-RPC error object; nothing panics.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod router;
pub mod rpc;

pub use adapters::direct::DirectSubmitter;
pub use domain::codec::{decode_raw_transaction, encode_raw_transaction};
pub use domain::error::{codes, ApiError, ApiResult};
pub use domain::types::{JsonRpcId, JsonRpcRequest, JsonRpcResponse, TransactionReceipt};
pub use ports::outbound::TransactionSubmitter;
pub use router::{handle_line, handle_request, route_method};
pub use rpc::eth::EthRpc;
