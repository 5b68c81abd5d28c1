//! Core of lmwrap: typed Lunar Magic operations, their command-line
//! rendering, and the dispatcher that turns a tool run into a result.
//!
//! This crate never spawns a process. Running the executable is delegated to
//! a [`ToolRunner`] supplied by the caller, normally the `ProcessInvoker`
//! from `lmwrap-runtime`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CapturePaths, CommandLine, CompressionFormat, InvocationOutcome, LevelExportFlags,
    LevelImportFlags, LevelNumber, Map16Location, Operation, RomSize,
};
pub use error::{DispatchError, DispatchResult, OptionParseError};
#[cfg(any(test, feature = "test-utils"))]
pub use ports::MockToolRunner;
pub use ports::{InvokeError, ToolRunner};
pub use services::Dispatcher;
