//! `ProcessInvoker`: the [`ToolRunner`] that spawns Lunar Magic.
//!
//! One process per call. The call blocks until the process exits, then both
//! capture files are read back into the outcome.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};

use lmwrap_core::{CommandLine, InvocationOutcome, InvokeError, ToolRunner};
use tracing::{debug, info};

use crate::capture::CaptureFiles;

static NEXT_INVOCATION: AtomicU64 = AtomicU64::new(1);

/// Where capture files go and whether they outlive the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokerConfig {
    /// Directory for capture files. `None` uses the system temp directory.
    pub capture_dir: Option<PathBuf>,
    /// Leave capture files on disk and report them in the outcome.
    pub keep_capture_files: bool,
}

impl InvokerConfig {
    #[must_use]
    pub fn with_capture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.capture_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub const fn keep_capture_files(mut self, keep: bool) -> Self {
        self.keep_capture_files = keep;
        self
    }
}

/// Runs the tool as a child process with its streams redirected to files.
///
/// Holds only configuration, so it can be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct ProcessInvoker {
    config: InvokerConfig,
}

impl ProcessInvoker {
    pub fn new(config: InvokerConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &InvokerConfig {
        &self.config
    }
}

impl ToolRunner for ProcessInvoker {
    fn run(
        &self,
        tool_path: &Path,
        command: &CommandLine,
    ) -> Result<InvocationOutcome, InvokeError> {
        let invocation = NEXT_INVOCATION.fetch_add(1, Ordering::Relaxed);
        let capture = CaptureFiles::create(self.config.capture_dir.as_deref())?;
        debug!(
            invocation,
            stdout = %capture.out_path().display(),
            stderr = %capture.err_path().display(),
            "Spawning {} {command}",
            tool_path.display()
        );

        let (stdout, stderr) = capture.stdio()?;
        let status = Command::new(tool_path)
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .map_err(|source| spawn_error(tool_path, command, source))?;

        let exit_code = exit_code(status);
        let captured = capture.read_back(self.config.keep_capture_files)?;
        info!(invocation, exit_code, "{} exited", command.flag());

        let outcome = InvocationOutcome::from_text(exit_code, &captured.out, &captured.err);
        Ok(match captured.paths {
            Some(paths) => outcome.with_capture_paths(paths),
            None => outcome,
        })
    }
}

fn spawn_error(tool_path: &Path, command: &CommandLine, source: io::Error) -> InvokeError {
    if source.kind() == io::ErrorKind::NotFound {
        InvokeError::ToolNotFound {
            path: tool_path.to_path_buf(),
            command: command.to_string(),
        }
    } else {
        InvokeError::Spawn {
            path: tool_path.to_path_buf(),
            command: command.to_string(),
            source,
        }
    }
}

/// Exit code of a finished process. A signal death reports `128 + signal`
/// like a shell does; anything else without a code is `-1`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
