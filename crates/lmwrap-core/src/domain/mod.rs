//! Domain types for Lunar Magic invocations.
//!
//! Everything here is pure: building an [`Operation`] and rendering its
//! [`CommandLine`] never spawns a process or touches the filesystem.

mod command_line;
mod level;
mod operation;
mod options;
mod outcome;

pub use command_line::CommandLine;
pub use level::{LevelNumber, Map16Location};
pub use operation::Operation;
pub use options::{CompressionFormat, LevelExportFlags, LevelImportFlags, RomSize};
pub use outcome::{CapturePaths, InvocationOutcome};
