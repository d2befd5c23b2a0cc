//! Session state
//!
//! Holds the connected account and the provider handle for the life of
//! the process. Empty until connect; a failed launch leaves the session
//! usable for the next attempt.

use crate::error::CliResult;
use crate::wallet::{AccountId, WalletProvider};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct Session<P: WalletProvider> {
    account: AccountId,
    contract_address: String,
    provider: P,
    in_flight: AtomicBool,
}

impl<P: WalletProvider> Session<P> {
    /// Connect the wallet and bind the session to the launchpad contract.
    pub async fn connect(provider: P, contract_address: String) -> CliResult<Self> {
        let account = provider.connect().await?;
        Ok(Session {
            account,
            contract_address,
            provider,
            in_flight: AtomicBool::new(false),
        })
    }

    pub fn account(&self) -> &AccountId {
        &self.account
    }

    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Claim the single in-flight slot. Returns false when another
    /// attempt is already running.
    pub fn begin_attempt(&self) -> bool {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the in-flight slot at the end of an attempt.
    pub fn end_attempt(&self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
