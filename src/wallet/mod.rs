//! Wallet provider abstraction
//!
//! The wallet is a collaborator: it owns the keys, signs, and talks to
//! the chain. This module defines the seam the orchestrator depends on,
//! so tests can drive the launch flow without any network.

pub mod agent;

use crate::error::CliResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use agent::AgentWallet;

/// Connected account identifier (hex address, opaque to this client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    /// Abbreviated display form: first six and last four characters
    pub fn short(&self) -> String {
        let s = &self.0;
        if s.len() <= 10 {
            return s.clone();
        }
        format!("{}…{}", &s[..6], &s[s.len() - 4..])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full parameter set for the contract's launchWithLiquidity operation.
///
/// `reserved0`/`reserved1` are interpreted by the contract alone; they
/// are carried in position and always zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchCall {
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub min_tokens: u64,
    pub reserved0: u64,
    pub reserved1: u64,
    pub deadline: u64,
    pub lock_seconds: u64,
    pub fee_percent: u8,
}

/// Handle for a transaction accepted by the network but not yet mined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLaunch {
    pub tx_hash: String,
}

/// Receipt for a confirmed launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub tx_hash: String,
    pub block_number: Option<u64>,
}

/// Capabilities the orchestrator needs from a wallet.
///
/// Each method is a single external call - no retry or backoff here;
/// any failure terminates the current attempt.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Establish the session account
    async fn connect(&self) -> CliResult<AccountId>;

    /// Current native balance of an account, in wei
    async fn get_balance(&self, account: &AccountId) -> CliResult<u128>;

    /// Sign and broadcast the launch call with attached native value
    async fn sign_and_send(
        &self,
        contract: &str,
        call: &LaunchCall,
        value_wei: u128,
    ) -> CliResult<PendingLaunch>;

    /// Block until the pending transaction is confirmed or reverts
    async fn await_confirmation(&self, pending: &PendingLaunch) -> CliResult<LaunchReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_short_display() {
        let account = AccountId("0x85c1c28589f61113ba7bad763da50f3b48f4e331".to_string());
        assert_eq!(account.short(), "0x85c1…e331");
    }

    #[test]
    fn test_account_short_leaves_tiny_ids_alone() {
        let account = AccountId("0xabc".to_string());
        assert_eq!(account.short(), "0xabc");
    }

    #[test]
    fn test_launch_call_serializes_reserved_pair() {
        let call = LaunchCall {
            name: "Ricky".to_string(),
            symbol: "RAT".to_string(),
            total_supply: 10_000_000,
            min_tokens: 50_000,
            reserved0: 0,
            reserved1: 0,
            deadline: 1_700_000_600,
            lock_seconds: 864_000,
            fee_percent: 5,
        };
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["reserved0"], 0);
        assert_eq!(value["reserved1"], 0);
        assert_eq!(value["min_tokens"], 50_000);
    }
}
