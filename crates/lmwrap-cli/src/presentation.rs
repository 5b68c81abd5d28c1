//! Output formatting for invocation outcomes.
//!
//! Format-only: deciding success or failure happens in the handler.

use std::io::{self, Write};

use lmwrap_core::InvocationOutcome;

/// How an outcome is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tool stdout to stdout, tool stderr to stderr.
    Text,
    /// One pretty-printed JSON document on stdout.
    Json,
}

impl OutputFormat {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Write `outcome` to the given streams in `format`.
pub fn write_outcome(
    outcome: &InvocationOutcome,
    format: OutputFormat,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *stdout, outcome)?;
            writeln!(stdout)
        }
        OutputFormat::Text => {
            for line in outcome.out() {
                writeln!(stdout, "{line}")?;
            }
            for line in outcome.err() {
                writeln!(stderr, "{line}")?;
            }
            if let Some(paths) = outcome.capture_paths() {
                writeln!(stderr, "stdout kept at {}", paths.out.display())?;
                writeln!(stderr, "stderr kept at {}", paths.err.display())?;
            }
            Ok(())
        }
    }
}

/// Print `outcome` to the process's own stdout and stderr.
pub fn print_outcome(outcome: &InvocationOutcome, format: OutputFormat) -> io::Result<()> {
    write_outcome(outcome, format, &mut io::stdout().lock(), &mut io::stderr().lock())
}
