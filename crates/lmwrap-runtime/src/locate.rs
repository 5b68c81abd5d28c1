//! Lunar Magic executable path resolution and validation.
//!
//! Precedence:
//! 1. An explicit path from the caller (CLI flag, config)
//! 2. The `LUNAR_MAGIC_PATH` environment variable
//!
//! There is no default install location to fall back to; without either
//! source resolution fails with [`ToolPathError::NotConfigured`].

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming the Lunar Magic executable.
pub const TOOL_PATH_ENV: &str = "LUNAR_MAGIC_PATH";

/// Errors from resolving or validating the tool path.
#[derive(Debug, Error)]
pub enum ToolPathError {
    #[error(
        "Lunar Magic location not configured\n\nPass --tool <path> or set {} to the Lunar Magic executable.",
        TOOL_PATH_ENV
    )]
    NotConfigured,

    #[error("Lunar Magic not found at: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Lunar Magic path is not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    /// The file exists but has no execute bit set.
    #[error("Lunar Magic exists but is not executable: {}", .path.display())]
    NotExecutable { path: PathBuf },

    #[error("Permission denied accessing Lunar Magic at: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read metadata for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPathSource {
    Explicit,
    Environment,
}

/// Resolve and validate the tool path from `explicit` or the environment.
///
/// # Examples
///
/// ```no_run
/// use lmwrap_runtime::resolve_tool_path;
///
/// match resolve_tool_path(None) {
///     Ok(path) => println!("Using Lunar Magic at {}", path.display()),
///     Err(e) => eprintln!("Error: {e}"),
/// }
/// ```
pub fn resolve_tool_path(explicit: Option<&Path>) -> Result<PathBuf, ToolPathError> {
    let (path, source) = select_candidate(explicit, std::env::var_os(TOOL_PATH_ENV))
        .ok_or(ToolPathError::NotConfigured)?;
    tracing::debug!(?source, "Resolved Lunar Magic path: {}", path.display());
    validate_tool(&path)
}

/// Pick the candidate path without touching the filesystem.
///
/// An empty environment value counts as unset.
pub fn select_candidate(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Option<(PathBuf, ToolPathSource)> {
    if let Some(path) = explicit {
        return Some((path.to_path_buf(), ToolPathSource::Explicit));
    }
    env_value
        .filter(|value| !value.is_empty())
        .map(|value| (PathBuf::from(value), ToolPathSource::Environment))
}

/// Check that `path` exists, is a regular file and, on Unix, is executable.
pub fn validate_tool(path: &Path) -> Result<PathBuf, ToolPathError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ToolPathError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(ToolPathError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ToolPathError::Metadata {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_file() {
        return Err(ToolPathError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Any execute bit (owner, group, or other)
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(ToolPathError::NotExecutable {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(path.to_path_buf())
}
