//! Pure functional business logic
//!
//! This module contains pure functions that implement the launch rules
//! without side effects. These functions can be tested independently
//! and composed together to build imperative shell functions.
//!
//! The key principle: All functions here are pure - they take inputs,
//! return outputs, and have no side effects (no I/O, no printing, no
//! state mutation).

pub mod form;
pub mod launch;
pub mod status;
pub mod units;

// Re-export commonly used types
pub use form::{resolve_lock_input, LaunchForm, DEFAULT_LP_LOCK};
pub use launch::{build_launch_request, deadline_timestamp, min_tokens_for_liquidity, LaunchRequest};
pub use status::{normalize_error, GENERIC_FAILURE, STATUS_SUCCESS};
pub use units::{format_native, parse_native, WEI_PER_NATIVE};
