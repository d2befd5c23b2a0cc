//! Launch parameter validation and derivation
//!
//! Pure functions that turn raw form input into a submission-ready
//! LaunchRequest, or a specific rejection. Checks run in a fixed order
//! and the first failure wins - nothing here touches the network.

use crate::cli_config::ProtocolParams;
use crate::error::{CliError, CliResult};
use crate::logic::form::LaunchForm;
use crate::logic::units;

/// Validated launch parameters, ready for submission.
///
/// Exists only for the duration of one attempt; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub fee_percent: u8,
    pub price_wei: u128,
    pub lp_lock_seconds: u64,
    pub min_tokens_for_liquidity: u64,
}

/// Smallest whole token count whose value at `price_wei` meets the
/// minimum funding requirement.
pub fn min_tokens_for_liquidity(min_funding_wei: u128, price_wei: u128) -> u64 {
    debug_assert!(price_wei > 0);
    let tokens = min_funding_wei.div_ceil(price_wei);
    u64::try_from(tokens).unwrap_or(u64::MAX)
}

/// Deadline for a launch submitted at `now`.
pub fn deadline_timestamp(now: u64, window_seconds: u64) -> u64 {
    now + window_seconds
}

fn parse_field<T: std::str::FromStr>(value: &str, field: &str) -> CliResult<T> {
    value.trim().parse().map_err(|_| CliError::InvalidField {
        field: field.to_string(),
    })
}

/// Validate the form against protocol constraints and derive the
/// numeric requirements. Checks in order, fail fast:
///
/// 1. all six fields present
/// 2. fee within the protocol cap
/// 3. LP lock at or above the floor
/// 4. price parses to a positive amount
/// 5. supply covers the minimum liquidity token count
pub fn build_launch_request(
    form: &LaunchForm,
    params: &ProtocolParams,
) -> CliResult<LaunchRequest> {
    let all_present = [
        &form.name,
        &form.symbol,
        &form.supply,
        &form.fee,
        &form.price_per_token,
        &form.lp_lock,
    ]
    .iter()
    .all(|f| !f.trim().is_empty());
    if !all_present {
        return Err(CliError::MissingFields);
    }

    let fee_percent: u8 = parse_field(&form.fee, "fee")?;
    if fee_percent > params.max_fee_percent {
        return Err(CliError::FeeTooHigh {
            max: params.max_fee_percent,
        });
    }

    let lp_lock_seconds: u64 = parse_field(&form.lp_lock, "lp_lock")?;
    if lp_lock_seconds < params.min_lock_seconds {
        return Err(CliError::LockTooShort {
            floor: params.min_lock_seconds,
        });
    }

    let price_wei = match units::parse_native(&form.price_per_token) {
        Some(p) if p > 0 => p,
        _ => return Err(CliError::InvalidPrice),
    };

    let total_supply: u64 = parse_field(&form.supply, "supply")?;
    let min_tokens = min_tokens_for_liquidity(params.min_funding_wei, price_wei);
    if total_supply < min_tokens {
        return Err(CliError::InsufficientSupply {
            minimum: min_tokens,
        });
    }

    Ok(LaunchRequest {
        name: form.name.trim().to_string(),
        symbol: form.symbol.trim().to_string(),
        total_supply,
        fee_percent,
        price_wei,
        lp_lock_seconds,
        min_tokens_for_liquidity: min_tokens,
    })
}
