//! CLI bootstrap - the composition root.
//!
//! The only place where the process runtime is wired to the core
//! dispatcher. Handlers receive the composed [`Dispatcher`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use lmwrap_core::Dispatcher;
use lmwrap_runtime::{InvokerConfig, LunarMagic};

use crate::error::CliError;
use crate::parser::Cli;

/// Environment variable naming the capture directory.
pub const CAPTURE_DIR_ENV: &str = "LMWRAP_CAPTURE_DIR";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit tool path; falls back to `LUNAR_MAGIC_PATH` when `None`.
    pub tool: Option<PathBuf>,
    pub invoker: InvokerConfig,
}

impl CliConfig {
    /// Configuration from the parsed global options.
    ///
    /// `--capture-dir` falls back to `LMWRAP_CAPTURE_DIR`. The tool path is
    /// left to [`LunarMagic::locate`], which reads `LUNAR_MAGIC_PATH` itself.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            tool: cli.tool.clone(),
            invoker: InvokerConfig {
                capture_dir: capture_dir(
                    cli.capture_dir.as_deref(),
                    std::env::var_os(CAPTURE_DIR_ENV),
                ),
                keep_capture_files: cli.keep_captures,
            },
        }
    }
}

/// The flag wins; an empty environment value counts as unset.
fn capture_dir(flag: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        env_value
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Resolve the tool and build the dispatcher.
pub fn bootstrap(config: CliConfig) -> Result<Dispatcher, CliError> {
    let dispatcher = LunarMagic::locate(config.tool.as_deref(), config.invoker)?;
    tracing::debug!("Using Lunar Magic at {}", dispatcher.tool_path().display());
    Ok(dispatcher)
}
