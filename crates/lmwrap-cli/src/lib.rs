//! `lmwrap` command-line adapter.
//!
//! Parses arguments, wires the runtime to the core dispatcher and prints
//! outcomes. The binary in `main.rs` only sets up logging and exit codes.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use presentation::OutputFormat;
