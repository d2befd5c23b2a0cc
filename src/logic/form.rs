//! Launch form state
//!
//! Holds the raw user-entered strings for the six launch fields.
//! Parsing and constraint checking happen at submit time in
//! `logic::launch` - the form itself never interprets its values.

use crate::error::{CliError, CliResult};

/// Default LP lock duration: 10 days in seconds
pub const DEFAULT_LP_LOCK: &str = "864000";

/// Raw launch parameters as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchForm {
    pub name: String,
    pub symbol: String,
    pub supply: String,
    pub fee: String,
    pub price_per_token: String,
    pub lp_lock: String,
}

impl Default for LaunchForm {
    fn default() -> Self {
        LaunchForm {
            name: String::new(),
            symbol: String::new(),
            supply: String::new(),
            fee: String::new(),
            price_per_token: String::new(),
            lp_lock: DEFAULT_LP_LOCK.to_string(),
        }
    }
}

impl LaunchForm {
    /// Mutate a single field by name. Unknown names are rejected.
    pub fn update_field(&mut self, field: &str, value: &str) -> CliResult<()> {
        match field {
            "name" => self.name = value.to_string(),
            "symbol" => self.symbol = value.to_string(),
            "supply" => self.supply = value.to_string(),
            "fee" => self.fee = value.to_string(),
            "price_per_token" => self.price_per_token = value.to_string(),
            "lp_lock" => self.lp_lock = value.to_string(),
            other => {
                return Err(CliError::UnknownField {
                    field: other.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// Resolve an LP lock input to a seconds string.
///
/// Accepts raw seconds or one of the preset durations offered to users:
/// `10d`, `14d`, `30d`.
pub fn resolve_lock_input(input: &str) -> String {
    match input.trim() {
        "10d" => "864000".to_string(),
        "14d" => "1209600".to_string(),
        "30d" => "2592000".to_string(),
        other => other.to_string(),
    }
}
