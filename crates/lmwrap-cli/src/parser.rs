//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for driving Lunar Magic.
///
/// Global options select the executable and how its output is captured;
/// the subcommand selects the operation.
#[derive(Debug, Parser)]
#[command(name = "lmwrap")]
#[command(about = "Run Lunar Magic command-line operations on SMW ROMs")]
#[command(version)]
pub struct Cli {
    /// Path to the Lunar Magic executable [env: LUNAR_MAGIC_PATH]
    #[arg(long, global = true)]
    pub tool: Option<PathBuf>,

    /// Directory for stdout/stderr capture files (defaults to the system temp dir)
    /// [env: LMWRAP_CAPTURE_DIR]
    #[arg(long = "capture-dir", global = true)]
    pub capture_dir: Option<PathBuf>,

    /// Keep capture files after the run and print their location
    #[arg(long = "keep-captures", global = true)]
    pub keep_captures: bool,

    /// Print the outcome as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
