//! Error normalization and terminal status strings
//!
//! Wallet agents and nodes disagree on error shapes. Normalization is a
//! prioritized list of extraction rules over a generic JSON value, so
//! the orchestrator never depends on any particular provider's nesting.

use serde_json::Value;

/// Status reported when a launch confirms on-chain
pub const STATUS_SUCCESS: &str = "Token launched & LP locked!";

/// Fallback when no message can be extracted from an error body
pub const GENERIC_FAILURE: &str = "Transaction failed.";

/// Extract a human-readable message from an error-shaped JSON value.
///
/// Rules, first match wins:
/// 1. `error.message` (structured provider error)
/// 2. `error` as a plain string
/// 3. top-level `message`
/// 4. the body itself, when it is a plain string
/// 5. fixed generic fallback
pub fn normalize_error(body: &Value) -> String {
    if let Some(msg) = body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return msg.to_string();
    }
    if let Some(msg) = body.get("error").and_then(|e| e.as_str()) {
        return msg.to_string();
    }
    if let Some(msg) = body.get("message").and_then(|m| m.as_str()) {
        return msg.to_string();
    }
    if let Some(msg) = body.as_str() {
        return msg.to_string();
    }
    GENERIC_FAILURE.to_string()
}
