//! CLI configuration loader and runtime defaults.
//!
//! Protocol-level constants (contract address, minimum funding, fee cap,
//! lock floor, deadline window) have compiled-in defaults that a TOML
//! config file under ~/.ratpad/ may override. They are resolved once at
//! startup and frozen process-wide.

use crate::error::{CliError, CliResult};
use crate::logic::units;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Default CLI config filename under ~/.ratpad/
pub const DEFAULT_CONFIG_FILENAME: &str = "cli.toml";

/// Fixed launchpad contract address on the target chain
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x85c1c28589f61113ba7bad763da50f3b48f4e331";

/// Minimum liquidity contribution: 0.05 native units in wei
pub const DEFAULT_MIN_FUNDING_WEI: u128 = 50_000_000_000_000_000;

/// Protocol cap on the taker fee, percent
pub const DEFAULT_MAX_FEE_PERCENT: u8 = 5;

/// Minimum LP lock duration: 10 days in seconds
pub const DEFAULT_MIN_LOCK_SECONDS: u64 = 864_000;

/// Execution window baked into each launch transaction
pub const DEFAULT_DEADLINE_SECONDS: u64 = 600;

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    pub defaults: Option<CliDefaults>,
    pub protocol: Option<ProtocolOverrides>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliDefaults {
    pub agent: Option<String>,
    pub format: Option<String>,
}

/// Optional overrides for the protocol constants.
///
/// `min_funding` is a decimal native-unit string ("0.05") - TOML has no
/// integer wide enough for wei.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ProtocolOverrides {
    pub contract_address: Option<String>,
    pub min_funding: Option<String>,
    pub max_fee_percent: Option<u8>,
    pub min_lock_seconds: Option<u64>,
    pub deadline_seconds: Option<u64>,
}

/// Resolved protocol constants, frozen at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolParams {
    pub contract_address: String,
    pub min_funding_wei: u128,
    pub max_fee_percent: u8,
    pub min_lock_seconds: u64,
    pub deadline_seconds: u64,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        ProtocolParams {
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            min_funding_wei: DEFAULT_MIN_FUNDING_WEI,
            max_fee_percent: DEFAULT_MAX_FEE_PERCENT,
            min_lock_seconds: DEFAULT_MIN_LOCK_SECONDS,
            deadline_seconds: DEFAULT_DEADLINE_SECONDS,
        }
    }
}

static PROTOCOL_PARAMS: OnceLock<ProtocolParams> = OnceLock::new();

pub fn set_protocol_params(params: ProtocolParams) {
    let _ = PROTOCOL_PARAMS.set(params);
}

pub fn protocol_params() -> ProtocolParams {
    PROTOCOL_PARAMS.get().cloned().unwrap_or_default()
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(".ratpad").join(DEFAULT_CONFIG_FILENAME)
    } else {
        PathBuf::from("./ratpad-cli.toml")
    }
}

pub fn config_path(path: Option<&str>) -> PathBuf {
    path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

pub fn load_config(path: Option<&str>) -> CliResult<CliConfig> {
    let config_path = config_path(path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigLoadFailed {
                path: config_path.display().to_string(),
                reason: "file not found".to_string(),
            });
        }
        return Ok(CliConfig::default());
    }

    let raw = fs::read_to_string(&config_path).map_err(|e| CliError::ConfigLoadFailed {
        path: config_path.display().to_string(),
        reason: e.to_string(),
    })?;

    toml::from_str(&raw).map_err(|e| CliError::ConfigError(format!("Invalid CLI config: {}", e)))
}

pub fn save_config(path: Option<&str>, config: &CliConfig) -> CliResult<()> {
    let config_path = config_path(path);
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::ConfigError(format!("Failed to create config directory: {}", e))
        })?;
    }

    let data = toml::to_string_pretty(config)
        .map_err(|e| CliError::ConfigError(format!("Failed to serialize config: {}", e)))?;
    fs::write(&config_path, data)
        .map_err(|e| CliError::ConfigError(format!("Failed to write config: {}", e)))?;
    Ok(())
}

/// Merge file overrides over the compiled-in protocol defaults.
pub fn resolve_protocol(config: &CliConfig) -> CliResult<ProtocolParams> {
    let mut params = ProtocolParams::default();
    let Some(overrides) = &config.protocol else {
        return Ok(params);
    };

    if let Some(address) = &overrides.contract_address {
        params.contract_address = address.clone();
    }
    if let Some(min_funding) = &overrides.min_funding {
        params.min_funding_wei = units::parse_native(min_funding).ok_or_else(|| {
            CliError::ConfigError(format!("Invalid min_funding amount: '{}'", min_funding))
        })?;
    }
    if let Some(max_fee) = overrides.max_fee_percent {
        params.max_fee_percent = max_fee;
    }
    if let Some(min_lock) = overrides.min_lock_seconds {
        params.min_lock_seconds = min_lock;
    }
    if let Some(deadline) = overrides.deadline_seconds {
        params.deadline_seconds = deadline;
    }
    Ok(params)
}
