//! CLI-specific error types and mappings.
//!
//! This module maps dispatch and configuration failures to exit codes and
//! user-facing messages.

use lmwrap_core::{DispatchError, InvokeError};
use lmwrap_runtime::ToolPathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad option value or unusable tool location.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tool could not be started.
    #[error("Process error: {0}")]
    Process(String),

    /// Capture files could not be written or read.
    #[error("IO error: {0}")]
    Io(String),

    /// The tool ran and reported failure.
    #[error("{message}")]
    ToolFailed { message: String, exit_code: i32 },
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// A tool failure exits with the tool's own code when it fits in a
    /// process exit status. Everything else follows sysexits.h.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,  // EX_CONFIG
            Self::Process(_) => 71, // EX_OSERR
            Self::Io(_) => 74,      // EX_IOERR
            Self::ToolFailed { exit_code, .. } => u8::try_from(*exit_code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
        }
    }
}

impl From<DispatchError> for CliError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::InvalidOption(e) => Self::Config(e.to_string()),
            DispatchError::Invoke(
                e @ (InvokeError::ToolNotFound { .. } | InvokeError::Spawn { .. }),
            ) => Self::Process(e.to_string()),
            DispatchError::Invoke(e @ InvokeError::Capture { .. }) => Self::Io(e.to_string()),
            DispatchError::ToolFailed { message, outcome } => Self::ToolFailed {
                message,
                exit_code: outcome.exit_code(),
            },
        }
    }
}

impl From<ToolPathError> for CliError {
    fn from(err: ToolPathError) -> Self {
        Self::Config(err.to_string())
    }
}
