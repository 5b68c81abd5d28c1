//! Error types for dispatching operations.
//!
//! Three failure classes reach the caller:
//!
//! - [`OptionParseError`]: an option value with no wire token. Raised before
//!   anything is spawned.
//! - [`InvokeError`]: the tool could not be started or its output could not be
//!   captured.
//! - [`DispatchError::ToolFailed`]: the tool ran and exited non-zero. The
//!   captured output travels with the error.

use std::convert::Infallible;

use thiserror::Error;

use crate::domain::InvocationOutcome;
use crate::ports::InvokeError;

/// An option value that cannot be rendered into a Lunar Magic argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionParseError {
    /// Not one of `2MB`, `3MB`, `4MB`, `6MB_SA1`, `8MB_SA1`.
    #[error("Unknown ROM size '{0}' (expected one of 2MB, 3MB, 4MB, 6MB_SA1, 8MB_SA1)")]
    RomSize(String),

    /// Not one of `LC_LZ2_Orig`, `LC_LZ2_Speed`, `LC_LZ3`.
    #[error(
        "Unknown compression format '{0}' (expected one of LC_LZ2_Orig, LC_LZ2_Speed, LC_LZ3)"
    )]
    Compression(String),

    /// Level numbers are hexadecimal and must fit in 16 bits.
    #[error("Invalid level number '{0}' (expected a hexadecimal value up to FFFF)")]
    LevelNumber(String),

    /// Map16 locations are written `X,Y` in hexadecimal.
    #[error("Invalid map16 location '{0}' (expected hexadecimal X,Y)")]
    Map16Location(String),

    /// Option bits the tool does not define for this operation.
    #[error("Invalid {kind} options '{value}'")]
    Flags { kind: &'static str, value: String },
}

/// Failure of a single dispatched operation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An option was rejected before the tool was invoked.
    #[error(transparent)]
    InvalidOption(#[from] OptionParseError),

    /// The tool could not be run at all.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// The tool ran and reported failure through its exit code.
    #[error("{message}")]
    ToolFailed {
        message: String,
        outcome: Box<InvocationOutcome>,
    },
}

impl DispatchError {
    /// Captured output of the failed run, if the tool ran at all.
    pub fn outcome(&self) -> Option<&InvocationOutcome> {
        match self {
            Self::ToolFailed { outcome, .. } => Some(outcome),
            Self::InvalidOption(_) | Self::Invoke(_) => None,
        }
    }

    /// Take ownership of the captured output of a failed run.
    pub fn into_outcome(self) -> Option<InvocationOutcome> {
        match self {
            Self::ToolFailed { outcome, .. } => Some(*outcome),
            Self::InvalidOption(_) | Self::Invoke(_) => None,
        }
    }
}

// Lets already-typed options pass through `TryInto` bounds.
impl From<Infallible> for DispatchError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result of dispatching an operation.
pub type DispatchResult = Result<InvocationOutcome, DispatchError>;
