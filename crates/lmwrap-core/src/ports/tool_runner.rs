//! Tool runner trait definition.
//!
//! This port is the single seam between rendered command lines and the OS.
//! Implementations spawn the tool, wait for it, and capture both streams.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{CommandLine, InvocationOutcome};

/// Errors that prevent a run from producing an [`InvocationOutcome`].
///
/// A non-zero exit is not an error at this level; it is reported through
/// the outcome.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The executable does not exist at the given path.
    #[error("Lunar Magic not found at '{}' (running {command})", .path.display())]
    ToolNotFound { path: PathBuf, command: String },

    /// The executable exists but the OS refused to start it.
    #[error("Failed to start '{}' (running {command}): {source}", .path.display())]
    Spawn {
        path: PathBuf,
        command: String,
        #[source]
        source: io::Error,
    },

    /// A capture file could not be created, attached or read back.
    #[error("Failed to {action} capture file '{}': {source}", .path.display())]
    Capture {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Runs the Lunar Magic executable with one command line.
///
/// Implementations must be safe to call from several threads at once: two
/// concurrent runs never observe each other's output.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait ToolRunner: Send + Sync {
    /// Run `tool_path` with the arguments of `command` and block until it exits.
    fn run(&self, tool_path: &Path, command: &CommandLine)
    -> Result<InvocationOutcome, InvokeError>;
}
