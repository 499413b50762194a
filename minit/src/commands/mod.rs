//! Command modules for the minit CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
