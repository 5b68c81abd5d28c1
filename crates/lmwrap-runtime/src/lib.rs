//! OS-level side of lmwrap: spawning Lunar Magic, capturing its output and
//! finding the executable.

#![deny(unsafe_code)]

mod capture;
mod invoker;
mod locate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lmwrap_core::Dispatcher;

pub use invoker::{InvokerConfig, ProcessInvoker};
pub use locate::{
    TOOL_PATH_ENV, ToolPathError, ToolPathSource, resolve_tool_path, select_candidate,
    validate_tool,
};

/// Constructors wiring a [`Dispatcher`] to a [`ProcessInvoker`].
pub struct LunarMagic;

impl LunarMagic {
    /// Dispatcher for the executable at `tool_path`, used as given.
    pub fn at(tool_path: impl Into<PathBuf>, config: InvokerConfig) -> Dispatcher {
        Dispatcher::new(tool_path, Arc::new(ProcessInvoker::new(config)))
    }

    /// Dispatcher for the executable found by [`resolve_tool_path`].
    pub fn locate(
        explicit: Option<&Path>,
        config: InvokerConfig,
    ) -> Result<Dispatcher, ToolPathError> {
        let tool_path = resolve_tool_path(explicit)?;
        Ok(Self::at(tool_path, config))
    }
}
