//! Per-invocation capture files for the tool's standard streams.
//!
//! Every run gets its own pair of uniquely named files, so concurrent runs
//! can never read each other's output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use lmwrap_core::{CapturePaths, InvokeError};
use tempfile::NamedTempFile;

const OUT_PREFIX: &str = "lm_wrapper_out";
const ERR_PREFIX: &str = "lm_wrapper_err";

/// Stream contents read back after the process exited.
#[derive(Debug)]
pub(crate) struct Captured {
    pub out: String,
    pub err: String,
    /// Set when the files were kept on disk.
    pub paths: Option<CapturePaths>,
}

/// The pair of files standard output and standard error are redirected to.
///
/// Dropping the value deletes both files.
#[derive(Debug)]
pub(crate) struct CaptureFiles {
    out: NamedTempFile,
    err: NamedTempFile,
}

impl CaptureFiles {
    /// Create both files in `dir`, or in the system temp directory.
    pub fn create(dir: Option<&Path>) -> Result<Self, InvokeError> {
        Ok(Self {
            out: create_one(OUT_PREFIX, dir)?,
            err: create_one(ERR_PREFIX, dir)?,
        })
    }

    pub fn out_path(&self) -> &Path {
        self.out.path()
    }

    pub fn err_path(&self) -> &Path {
        self.err.path()
    }

    /// Handles to pass as the child's stdout and stderr.
    pub fn stdio(&self) -> Result<(Stdio, Stdio), InvokeError> {
        Ok((attach(&self.out)?, attach(&self.err)?))
    }

    /// Read both files back. Unless `keep` is set the files are removed.
    pub fn read_back(self, keep: bool) -> Result<Captured, InvokeError> {
        let out = read_lossy(self.out.path())?;
        let err = read_lossy(self.err.path())?;

        if !keep {
            return Ok(Captured {
                out,
                err,
                paths: None,
            });
        }

        let paths = keep_both(self.out, self.err, persist)?;
        Ok(Captured {
            out,
            err,
            paths: Some(paths),
        })
    }
}

fn create_one(prefix: &str, dir: Option<&Path>) -> Result<NamedTempFile, InvokeError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(prefix).suffix(".txt");
    let created = match dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    };
    created.map_err(|source| InvokeError::Capture {
        action: "create",
        path: dir.map_or_else(std::env::temp_dir, Path::to_path_buf),
        source,
    })
}

fn attach(file: &NamedTempFile) -> Result<Stdio, InvokeError> {
    file.as_file()
        .try_clone()
        .map(Stdio::from)
        .map_err(|source| InvokeError::Capture {
            action: "attach",
            path: file.path().to_path_buf(),
            source,
        })
}

fn read_lossy(path: &Path) -> Result<String, InvokeError> {
    let bytes = fs::read(path).map_err(|source| InvokeError::Capture {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Keep both files on disk, or neither.
///
/// If the second file cannot be kept, the first one is removed again before
/// the error is returned.
fn keep_both(
    out: NamedTempFile,
    err: NamedTempFile,
    mut keep: impl FnMut(NamedTempFile) -> Result<PathBuf, InvokeError>,
) -> Result<CapturePaths, InvokeError> {
    let out = keep(out)?;
    match keep(err) {
        Ok(err) => Ok(CapturePaths { out, err }),
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(&out) {
                tracing::warn!(
                    "Failed to remove kept capture file {}: {cleanup}",
                    out.display()
                );
            }
            Err(e)
        }
    }
}

fn persist(file: NamedTempFile) -> Result<PathBuf, InvokeError> {
    let path = file.path().to_path_buf();
    file.keep()
        .map(|(_, path)| path)
        .map_err(|e| InvokeError::Capture {
            action: "keep",
            path,
            source: io::Error::from(e),
        })
}
