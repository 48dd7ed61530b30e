//! # JSON-RPC Flows
//!
//! Request lines through the node runtime: router, gateway, proposer
//! consultation, FIFO apply queue and the state transition service.

#[cfg(test)]
mod tests {
    use super::super::fixtures::eth;
    use lc_01_signature_recovery::Wallet;
    use lc_06_api_gateway::{codes, encode_raw_transaction};
    use node_runtime::{NodeConfig, NodeRuntime};
    use serde_json::{json, Value};
    use shared_types::{format_address, to_hex_bytes, Address, UnsignedTransaction, U256};
    use std::sync::Arc;

    const RECIPIENT: Address = [0x52; 20];

    fn node_funding(accounts: &[(Address, U256)]) -> NodeRuntime {
        let mut config = NodeConfig::devnet();
        config.genesis.allocations = accounts.to_vec();
        NodeRuntime::start(config).unwrap()
    }

    fn raw_transfer(wallet: &Wallet, nonce: u64, value: U256) -> String {
        let tx = wallet
            .sign_transaction(
                UnsignedTransaction {
                    nonce,
                    gas_price: U256::from(20_000_000_000u64),
                    gas_limit: U256::from(21_000u64),
                    to: RECIPIENT,
                    value,
                    data: vec![],
                },
                Some(1),
            )
            .unwrap();
        to_hex_bytes(&encode_raw_transaction(&tx))
    }

    async fn call(node: &NodeRuntime, id: u64, method: &str, params: Value) -> Value {
        let line = json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params});
        let response: Value = serde_json::from_str(&node.handle_line(&line.to_string()).await).unwrap();
        assert_eq!(response["jsonrpc"], "2.0");
        assert_eq!(response["id"], id);
        response
    }

    #[tokio::test]
    async fn test_devnet_account_is_funded() {
        let node = NodeRuntime::start(NodeConfig::devnet()).unwrap();
        let response = call(
            &node,
            1,
            "eth_getBalance",
            json!(["0x4709421B04E70E3925DFC86307727B588709C7BB", "latest"]),
        )
        .await;
        assert_eq!(response["result"], "0x7ce66c50e2840000");
    }

    #[tokio::test]
    async fn test_send_receipt_and_replay() {
        let sender = Wallet::random();
        let node = node_funding(&[(sender.address(), eth(9))]);
        let sender_hex = format_address(&sender.address());

        assert_eq!(call(&node, 1, "ping", json!([])).await["result"], "pong");
        assert_eq!(
            call(&node, 2, "eth_getTransactionCount", json!([sender_hex, "latest"])).await["result"],
            "0x0"
        );

        let raw = raw_transfer(&sender, 0, eth(1));
        let sent = call(&node, 3, "eth_sendRawTransaction", json!([raw.clone()])).await;
        let tx_hash = sent["result"].as_str().unwrap().to_string();
        assert_eq!(tx_hash.len(), 66);

        assert_eq!(
            call(&node, 4, "eth_getTransactionCount", json!([sender_hex, "latest"])).await["result"],
            "0x1"
        );
        assert_eq!(
            call(&node, 5, "eth_getBalance", json!([sender_hex, "latest"])).await["result"],
            "0x6f05b59d3b200000"
        );
        assert_eq!(
            call(&node, 6, "eth_getBalance", json!([format_address(&RECIPIENT), "latest"])).await
                ["result"],
            "0xde0b6b3a7640000"
        );
        assert_eq!(call(&node, 7, "eth_blockNumber", json!([])).await["result"], "0x0");

        let receipt = call(&node, 8, "eth_getTransactionReceipt", json!([tx_hash])).await;
        let receipt = &receipt["result"];
        assert_eq!(receipt["blockNumber"], "0x0");
        assert_eq!(receipt["transactionIndex"], "0x0");
        assert_eq!(receipt["nonce"], "0x0");
        assert_eq!(receipt["gasPrice"], "0x4a817c800");
        assert_eq!(receipt["gasLimit"], "0x5208");
        assert_eq!(receipt["value"], "0xde0b6b3a7640000");
        assert_eq!(receipt["data"], "0x");
        assert!(receipt["v"] == "0x25" || receipt["v"] == "0x26");

        let replay = call(&node, 9, "eth_sendRawTransaction", json!([raw])).await;
        assert_eq!(replay["error"]["code"], codes::TRANSACTION_REJECTED);
        assert_eq!(replay["error"]["data"]["kind"], "InvalidNonce");
        assert_eq!(replay["error"]["data"]["retryable"], false);
        assert_eq!(node.ledger().get_balance(&sender.address()), eth(8));
    }

    #[tokio::test]
    async fn test_insufficient_balance_is_retryable() {
        let sender = Wallet::random();
        let node = node_funding(&[(sender.address(), eth(1))]);

        let response = call(
            &node,
            1,
            "eth_sendRawTransaction",
            json!([raw_transfer(&sender, 0, eth(2))]),
        )
        .await;
        assert_eq!(response["error"]["data"]["kind"], "InsufficientBalance");
        assert_eq!(response["error"]["data"]["retryable"], true);
        assert_eq!(node.ledger().chain_len(), 0);
    }

    #[tokio::test]
    async fn test_contract_creation_rejected() {
        let node = node_funding(&[]);
        // [nonce, gasPrice, gasLimit, to="", value, data, v, r, s]
        let raw = "0xc9808080808080808080";
        let response = call(&node, 1, "eth_sendRawTransaction", json!([raw])).await;
        assert_eq!(response["error"]["code"], codes::INVALID_PARAMS);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_clients_each_get_one_block_per_tx() {
        let wallets: Vec<Wallet> = (0..8).map(|_| Wallet::random()).collect();
        let allocations: Vec<_> = wallets.iter().map(|w| (w.address(), eth(1))).collect();
        let node = Arc::new(node_funding(&allocations));

        let mut clients = Vec::new();
        for (id, wallet) in wallets.into_iter().enumerate() {
            let node = Arc::clone(&node);
            clients.push(tokio::spawn(async move {
                for nonce in 0..3 {
                    let raw = raw_transfer(&wallet, nonce, U256::from(1u64));
                    let line = json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "method": "eth_sendRawTransaction",
                        "params": [raw],
                    });
                    let response: Value =
                        serde_json::from_str(&node.handle_line(&line.to_string()).await).unwrap();
                    assert!(response["error"].is_null(), "rejected: {}", response);
                }
            }));
        }
        for client in clients {
            client.await.unwrap();
        }

        let ledger = node.ledger();
        assert_eq!(ledger.chain_len(), 24);
        assert_eq!(ledger.get_balance(&RECIPIENT), U256::from(24u64));
        let mut parent = shared_types::GENESIS_PARENT_HASH;
        for number in 0..24 {
            let block = ledger.block(number).unwrap();
            assert_eq!(block.header.parent_hash, parent);
            assert_eq!(block.transactions.len(), 1);
            parent = block.hash();
        }
    }
}
