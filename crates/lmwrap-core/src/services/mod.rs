//! Core services.
//!
//! Services orchestrate between ports and domain logic. They do not know
//! which concrete [`ToolRunner`](crate::ports::ToolRunner) they are given.

mod dispatcher;

pub use dispatcher::Dispatcher;
