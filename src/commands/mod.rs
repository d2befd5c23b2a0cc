//! Command handlers (imperative shell)
//!
//! Each command module pairs a thin public entry point with an
//! `_with_output` implementation that takes an injected Output for
//! testing.

pub mod config;
pub mod launch;
pub mod version;
pub mod wallet;
