//! Wallet-agent implementation of the provider seam
//!
//! Talks HTTP JSON to a local wallet agent that holds the keys, signs,
//! and relays to the chain. Response bodies follow the agent API's
//! success/error envelope; error payloads are normalized before they
//! reach the user.

use crate::client::AgentClient;
use crate::error::{CliError, CliResult};
use crate::logic::status::normalize_error;
use crate::wallet::{AccountId, LaunchCall, LaunchReceipt, PendingLaunch, WalletProvider};
use async_trait::async_trait;
use serde_json::{json, Value};

const CONNECT_ENDPOINT: &str = "/api/v1/wallet/connect";
const SUBMIT_ENDPOINT: &str = "/api/v1/launch/submit";

fn balance_path(account: &AccountId) -> String {
    format!("/api/v1/wallet/balance/{}", account)
}

fn receipt_path(tx_hash: &str) -> String {
    format!("/api/v1/launch/receipt/{}", tx_hash)
}

pub struct AgentWallet {
    client: AgentClient,
}

impl AgentWallet {
    pub fn new(client: AgentClient) -> Self {
        AgentWallet { client }
    }

    fn parse(endpoint: &str, raw: &str) -> CliResult<Value> {
        AgentClient::parse_json(raw).map_err(|e| CliError::ApiCallFailed {
            endpoint: endpoint.to_string(),
            reason: format!("Failed to parse response: {}", e),
        })
    }

    fn succeeded(body: &Value) -> bool {
        body.get("success").and_then(|v| v.as_bool()).unwrap_or(false)
    }
}

#[async_trait]
impl WalletProvider for AgentWallet {
    async fn connect(&self) -> CliResult<AccountId> {
        let raw = self
            .client
            .post_json(CONNECT_ENDPOINT, &json!({}))
            .await
            .map_err(|e| CliError::WalletUnavailable(e.to_string()))?;

        let body = Self::parse(CONNECT_ENDPOINT, &raw)?;
        if !Self::succeeded(&body) {
            return Err(CliError::WalletUnavailable(normalize_error(&body)));
        }

        body.get("account")
            .and_then(|v| v.as_str())
            .map(|s| AccountId(s.to_string()))
            .ok_or_else(|| CliError::WalletUnavailable("agent returned no account".to_string()))
    }

    async fn get_balance(&self, account: &AccountId) -> CliResult<u128> {
        let path = balance_path(account);
        let raw = self.client.get(&path).await.map_err(|e| CliError::ApiCallFailed {
            endpoint: path.clone(),
            reason: e.to_string(),
        })?;

        let body = Self::parse(&path, &raw)?;
        // wei exceeds every JSON integer width; the agent sends it as a string
        body.get("balance_wei")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse::<u128>().ok())
            .ok_or_else(|| CliError::ApiCallFailed {
                endpoint: path,
                reason: "missing or invalid balance_wei".to_string(),
            })
    }

    async fn sign_and_send(
        &self,
        contract: &str,
        call: &LaunchCall,
        value_wei: u128,
    ) -> CliResult<PendingLaunch> {
        let request_body = json!({
            "contract": contract,
            "operation": "launchWithLiquidity",
            "value_wei": value_wei.to_string(),
            "call": call,
        });

        let raw = self
            .client
            .post_json(SUBMIT_ENDPOINT, &request_body)
            .await
            .map_err(|e| CliError::SubmissionRejected(e.to_string()))?;

        let body = Self::parse(SUBMIT_ENDPOINT, &raw)?;
        if !Self::succeeded(&body) {
            return Err(CliError::SubmissionRejected(normalize_error(&body)));
        }

        body.get("tx_hash")
            .and_then(|v| v.as_str())
            .map(|s| PendingLaunch {
                tx_hash: s.to_string(),
            })
            .ok_or_else(|| {
                CliError::SubmissionRejected("agent returned no transaction hash".to_string())
            })
    }

    async fn await_confirmation(&self, pending: &PendingLaunch) -> CliResult<LaunchReceipt> {
        let path = receipt_path(&pending.tx_hash);
        // the agent blocks until the transaction is mined or reverts
        let raw = self.client.get(&path).await.map_err(|e| {
            CliError::ConfirmationFailed(e.to_string())
        })?;

        let body = Self::parse(&path, &raw)?;
        if !Self::succeeded(&body) {
            return Err(CliError::ConfirmationFailed(normalize_error(&body)));
        }

        Ok(LaunchReceipt {
            tx_hash: pending.tx_hash.clone(),
            block_number: body.get("block_number").and_then(|v| v.as_u64()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_path() {
        let account = AccountId("0xabc123".to_string());
        assert_eq!(balance_path(&account), "/api/v1/wallet/balance/0xabc123");
    }

    #[test]
    fn test_receipt_path() {
        assert_eq!(receipt_path("0xdeadbeef"), "/api/v1/launch/receipt/0xdeadbeef");
    }

    #[test]
    fn test_succeeded_probes_envelope() {
        assert!(AgentWallet::succeeded(&json!({"success": true})));
        assert!(!AgentWallet::succeeded(&json!({"success": false})));
        assert!(!AgentWallet::succeeded(&json!({})));
    }
}
