//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They use only domain types and say nothing about how a process is spawned.

pub mod tool_runner;

#[cfg(any(test, feature = "test-utils"))]
pub use tool_runner::MockToolRunner;
pub use tool_runner::{InvokeError, ToolRunner};
