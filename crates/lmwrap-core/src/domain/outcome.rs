//! Captured result of one tool run.

use std::path::PathBuf;

use serde::Serialize;

/// Files that held the captured streams, when they were kept after the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturePaths {
    pub out: PathBuf,
    pub err: PathBuf,
}

/// Exit status plus the captured standard output and standard error of a run.
///
/// Each stream is held as its lines, in the order the tool wrote them,
/// without line terminators. `succeeded` and `error_code` are derived from
/// `exit_code` on construction and cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationOutcome {
    exit_code: i32,
    succeeded: bool,
    error_code: Option<i32>,
    out: Vec<String>,
    err: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capture_paths: Option<CapturePaths>,
}

impl InvocationOutcome {
    pub fn new(exit_code: i32, out: Vec<String>, err: Vec<String>) -> Self {
        let succeeded = exit_code == 0;
        Self {
            exit_code,
            succeeded,
            error_code: (!succeeded).then_some(exit_code),
            out,
            err,
            capture_paths: None,
        }
    }

    /// Build an outcome from raw stream contents, splitting them into lines.
    ///
    /// Both `\n` and `\r\n` end a line. A final unterminated line is kept.
    pub fn from_text(exit_code: i32, out: &str, err: &str) -> Self {
        Self::new(exit_code, split_lines(out), split_lines(err))
    }

    /// Attach the locations of kept capture files.
    #[must_use]
    pub fn with_capture_paths(mut self, paths: CapturePaths) -> Self {
        self.capture_paths = Some(paths);
        self
    }

    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// The exit code, present only when the run failed.
    pub const fn error_code(&self) -> Option<i32> {
        self.error_code
    }

    /// Standard output lines, in emission order.
    pub fn out(&self) -> &[String] {
        &self.out
    }

    /// Standard error lines, in emission order.
    pub fn err(&self) -> &[String] {
        &self.err
    }

    pub const fn capture_paths(&self) -> Option<&CapturePaths> {
        self.capture_paths.as_ref()
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}
