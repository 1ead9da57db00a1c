//! Library exports for tripbook-cli.
//!
//! Exposes the CLI structure so it can be introspected for completions and
//! documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
