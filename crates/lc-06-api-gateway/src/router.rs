use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::{JsonRpcRequest, JsonRpcResponse};
use crate::ports::outbound::TransactionSubmitter;
use crate::rpc::eth::EthRpc;
use lc_05_state_transition::StateTransitionApi;
use serde_json::Value;
use tracing::debug;

/// Parses one JSON-RPC request and produces its response. Malformed input
/// yields a parse error response with no id.
pub async fn handle_line<L, Q>(rpc: &EthRpc<L, Q>, line: &str) -> JsonRpcResponse
where
    L: StateTransitionApi,
    Q: TransactionSubmitter,
{
    match serde_json::from_str::<JsonRpcRequest>(line) {
        Ok(request) => handle_request(rpc, request).await,
        Err(e) => JsonRpcResponse::failure(None, ApiError::from(e)),
    }
}

pub async fn handle_request<L, Q>(rpc: &EthRpc<L, Q>, request: JsonRpcRequest) -> JsonRpcResponse
where
    L: StateTransitionApi,
    Q: TransactionSubmitter,
{
    if let Some(version) = &request.jsonrpc {
        if version != "2.0" {
            return JsonRpcResponse::failure(
                request.id,
                ApiError::invalid_request(format!("unsupported jsonrpc version '{}'", version)),
            );
        }
    }

    debug!(method = %request.method, "Handling RPC request");
    match route_method(rpc, &request.method, &request.params).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(error) => JsonRpcResponse::failure(request.id, error),
    }
}

/// Route a JSON-RPC method to its handler.
pub async fn route_method<L, Q>(
    rpc: &EthRpc<L, Q>,
    method: &str,
    params: &[Value],
) -> ApiResult<Value>
where
    L: StateTransitionApi,
    Q: TransactionSubmitter,
{
    match method {
        "ping" => Ok(Value::from(rpc.ping())),
        "eth_getTransactionCount" => {
            let address = param_str(params, 0, "address")?;
            let block = param_str(params, 1, "block")?;
            rpc.get_transaction_count(address, block).map(Value::from)
        }
        "eth_getBalance" => {
            let address = param_str(params, 0, "address")?;
            let block = param_str(params, 1, "block")?;
            rpc.get_balance(address, block).map(Value::from)
        }
        "eth_blockNumber" => rpc.block_number().map(Value::from),
        "eth_sendRawTransaction" => {
            let raw = param_str(params, 0, "raw transaction")?;
            rpc.send_raw_transaction(raw).await.map(Value::from)
        }
        "eth_getTransactionReceipt" | "eth_getTransactionByHash" => {
            let tx_hash = param_str(params, 0, "transaction hash")?;
            let receipt = rpc.get_transaction_receipt(tx_hash)?;
            serde_json::to_value(receipt).map_err(|e| ApiError::internal(e.to_string()))
        }
        _ => Err(ApiError::method_not_found(method)),
    }
}

fn param_str<'a>(params: &'a [Value], index: usize, name: &str) -> ApiResult<&'a str> {
    match params.get(index) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ApiError::invalid_params(format!(
            "{} (param {}) must be a string",
            name, index
        ))),
        None => Err(ApiError::invalid_params(format!(
            "missing {} (param {})",
            name, index
        ))),
    }
}
