//! Structured error types for the RatPad CLI
//!
//! Provides domain-specific error types that replace generic Result<()>
//! and enable proper error handling and testability.

use thiserror::Error;

/// RatPad CLI error types with proper context
#[derive(Error, Debug)]
pub enum CliError {
    // Launch parameter validation
    #[error("Please fill all fields")]
    MissingFields,

    #[error("Fee must be at most {max}%")]
    FeeTooHigh { max: u8 },

    #[error("LP lock must be at least {floor} seconds")]
    LockTooShort { floor: u64 },

    #[error("Invalid token price")]
    InvalidPrice,

    #[error("Supply too low: at least {minimum} tokens are needed to back the minimum liquidity contribution")]
    InsufficientSupply { minimum: u64 },

    #[error("Invalid value for field '{field}'")]
    InvalidField { field: String },

    #[error("Unknown form field: {field}")]
    UnknownField { field: String },

    // Preconditions
    #[error("Insufficient wallet funds: need at least {required}, wallet holds {available}")]
    InsufficientFunds { required: String, available: String },

    #[error("Connect wallet first")]
    NotConnected,

    // Wallet / network operations
    #[error("Wallet agent unavailable: {0}")]
    WalletUnavailable(String),

    #[error("Transaction rejected: {0}")]
    SubmissionRejected(String),

    #[error("Transaction failed: {0}")]
    ConfirmationFailed(String),

    #[error("API call to {endpoint} failed: {reason}")]
    ApiCallFailed { endpoint: String, reason: String },

    // Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load config from {path}: {reason}")]
    ConfigLoadFailed { path: String, reason: String },

    // I/O operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // Serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    // HTTP/Network
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Other(s)
    }
}

impl From<&str> for CliError {
    fn from(s: &str) -> Self {
        CliError::Other(s.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_too_high_message() {
        let err = CliError::FeeTooHigh { max: 5 };
        assert_eq!(err.to_string(), "Fee must be at most 5%");
    }

    #[test]
    fn test_insufficient_supply_names_minimum() {
        let err = CliError::InsufficientSupply { minimum: 50_000 };
        assert!(err.to_string().contains("50000"));
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = CliError::InsufficientFunds {
            required: "0.05".to_string(),
            available: "0.049".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Insufficient wallet funds"));
        assert!(msg.contains("0.05"));
        assert!(msg.contains("0.049"));
    }

    #[test]
    fn test_lock_too_short_names_floor() {
        let err = CliError::LockTooShort { floor: 864_000 };
        assert!(err.to_string().contains("864000"));
    }
}
